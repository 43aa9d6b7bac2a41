use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    render_chart(frame, app, chunks[1], theme);
    render_bottombar(frame, app, chunks[2], theme);
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let s = &app.summary;
    let range = match (s.min, s.max) {
        (Some(lo), Some(hi)) => format!("[{lo}, {hi}]"),
        _ => "empty".into(),
    };
    let info = format!(
        " {} | {} values | range {} | {}/256 buckets used",
        app.input_path, s.count, range, s.occupied_buckets
    );
    let line = Line::from(vec![
        Span::styled("[HIST]", Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)),
        Span::raw(info),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg).fg(theme.fg)), area);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let visible = app.visible_buckets();
    let title = format!("Buckets {}..={}", visible.start, visible.end.saturating_sub(1));
    let bars: Vec<Bar> = visible
        .clone()
        .map(|i| {
            let style = if i == app.cursor {
                Style::default().fg(theme.cursor)
            } else {
                Style::default().fg(theme.bar)
            };
            // label every 8th bucket so narrow bars stay readable
            let label = if i % 8 == 0 || i == app.cursor { i.to_string() } else { String::new() };
            Bar::default()
                .value(app.hist[i])
                .text_value(String::new())
                .label(Line::from(label))
                .style(style)
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(app.bar_width)
        .bar_gap(1)
        .max(app.peak_count().max(1))
        .label_style(Style::default().fg(theme.muted))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let bounds = match app.cursor_bounds() {
        Some((lo, hi)) if lo == hi => format!("value {lo}"),
        Some((lo, hi)) => format!("values {lo}..={hi}"),
        None => "no integers".into(),
    };
    let text = format!(
        " bucket {} | {} | count {} | {}",
        app.cursor, bounds, app.hist[app.cursor], app.status_msg
    );
    frame.render_widget(Paragraph::new(text).style(Style::default().bg(theme.bg).fg(theme.fg)), area);
}
