use crate::tui::theme::{next_theme_name, Theme};
use hist256_common::Config;
use hist256_core::{
    bucket_bounds, summarize, Histogram, HistogramSummary, ValueRange, BUCKET_COUNT,
};

pub struct App {
    pub input_path: String,
    pub hist: Histogram,
    pub range: Option<ValueRange>,
    pub summary: HistogramSummary,
    pub cursor: usize,
    pub offset: usize,   // first bucket in the visible window
    pub capacity: usize, // buckets that fit on screen, refreshed every frame
    pub bar_width: u16,
    pub theme_name: String,
    pub theme: Theme,
    pub status_msg: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(input_path: String, values: &[i64], hist: Histogram, config: &Config) -> Self {
        Self {
            input_path,
            hist,
            range: hist256_core::value_range(values),
            summary: summarize(values, &hist),
            cursor: 0,
            offset: 0,
            capacity: BUCKET_COUNT,
            bar_width: config.display.bar_width.max(1),
            theme_name: config.display.theme.clone(),
            theme: Theme::from_name(&config.display.theme),
            status_msg: "Ready | q:quit h/l:move t:theme".into(),
            should_quit: false,
        }
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.clamp(1, BUCKET_COUNT);
        self.scroll_to_cursor();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, BUCKET_COUNT as isize - 1) as usize;
        self.scroll_to_cursor();
    }

    pub fn jump_first(&mut self) {
        self.cursor = 0;
        self.scroll_to_cursor();
    }

    pub fn jump_last(&mut self) {
        self.cursor = BUCKET_COUNT - 1;
        self.scroll_to_cursor();
    }

    pub fn page(&mut self, forward: bool) {
        let step = self.capacity as isize;
        self.move_cursor(if forward { step } else { -step });
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.capacity {
            self.offset = self.cursor + 1 - self.capacity;
        }
        self.offset = self.offset.min(BUCKET_COUNT - self.capacity);
    }

    pub fn visible_buckets(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.capacity).min(BUCKET_COUNT)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_name = next_theme_name(&self.theme_name).to_owned();
        self.theme = Theme::from_name(&self.theme_name);
        self.status_msg = format!("theme: {}", self.theme_name);
    }

    pub fn cursor_bounds(&self) -> Option<(i64, i64)> {
        self.range.and_then(|r| bucket_bounds(self.cursor, r))
    }

    pub fn peak_count(&self) -> u64 {
        self.hist.iter().copied().max().unwrap_or(0)
    }
}

/// Buckets that fit in `width` columns inside a bordered block, one gap per bar.
pub fn fit_buckets(width: u16, bar_width: u16) -> usize {
    let inner = width.saturating_sub(2) as usize;
    let per_bar = bar_width.max(1) as usize + 1;
    (inner / per_bar).clamp(1, BUCKET_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hist256_core::bin_histogram;

    fn app(values: &[i64]) -> App {
        App::new("test".into(), values, bin_histogram(values), &Config::default())
    }

    #[test]
    fn cursor_is_clamped() {
        let mut a = app(&[0, 255]);
        a.move_cursor(-5);
        assert_eq!(a.cursor, 0);
        a.move_cursor(1000);
        assert_eq!(a.cursor, 255);
    }

    #[test]
    fn window_follows_cursor() {
        let mut a = app(&[0, 255]);
        a.set_capacity(40);
        assert_eq!(a.visible_buckets(), 0..40);
        a.move_cursor(45);
        assert_eq!(a.offset, 6);
        assert!(a.visible_buckets().contains(&45));
        a.jump_last();
        assert_eq!(a.visible_buckets(), 216..256);
        a.jump_first();
        assert_eq!(a.offset, 0);
    }

    #[test]
    fn paging_moves_by_capacity() {
        let mut a = app(&[0, 255]);
        a.set_capacity(50);
        a.page(true);
        assert_eq!(a.cursor, 50);
        a.page(false);
        assert_eq!(a.cursor, 0);
    }

    #[test]
    fn growing_capacity_keeps_window_in_range() {
        let mut a = app(&[0, 255]);
        a.set_capacity(10);
        a.jump_last();
        a.set_capacity(300);
        assert_eq!(a.visible_buckets(), 0..256);
    }

    #[test]
    fn cursor_bounds_track_range() {
        let mut a = app(&[-10, 0, 10]);
        assert_eq!(a.cursor_bounds(), Some((-10, -10)));
        a.move_cursor(127);
        assert_eq!(a.cursor_bounds(), Some((0, 0)));
        assert_eq!(app(&[]).cursor_bounds(), None);
    }

    #[test]
    fn theme_cycles_through_all() {
        let mut a = app(&[1]);
        for _ in 0..5 {
            a.cycle_theme();
        }
        assert_eq!(a.theme_name, "dark");
    }

    #[test] fn fit_narrow_terminal() { assert_eq!(fit_buckets(10, 3), 2); }
    #[test] fn fit_never_zero() { assert_eq!(fit_buckets(0, 3), 1); }
    #[test] fn fit_caps_at_bucket_count() { assert_eq!(fit_buckets(u16::MAX, 1), BUCKET_COUNT); }
}
