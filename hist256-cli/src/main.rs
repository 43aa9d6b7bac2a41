mod tui;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::{Path, PathBuf};
use std::{io, time::Duration};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tui::app::{fit_buckets, App};
use tui::events::handle_key;
use tui::ui::render;
use hist256_common::Config;
use hist256_core::{
    bin_histogram, export_csv, export_json, format_literal, histogram_bins, print_summary,
    read_values, summarize, value_range, Histogram,
};

#[derive(Parser)]
#[command(name = "hist256", version, about = "256-bucket integer histogram")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 256 counts as a list
    Bin { path: PathBuf },
    Summary { path: PathBuf, #[arg(long)] save: bool },
    Export {
        path: PathBuf,
        #[arg(long)] format: Option<String>,
        #[arg(long)] output: Option<PathBuf>,
    },
    /// Interactive bar chart
    View { path: PathBuf },
    Completions { #[arg(value_enum)] shell: clap_complete::Shell },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "hist256=debug" } else { "hist256=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config {}: {e}", Config::config_path().display());
        Config::default()
    });
    match cli.command {
        Commands::Bin { path } => run_bin(&path, &config)?,
        Commands::Summary { path, save } => run_summary(&path, save, &config)?,
        Commands::Export { path, format, output } => run_export(&path, format, output, &config)?,
        Commands::View { path } => run_view(&path, &config)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hist256", &mut io::stdout());
        }
    }
    Ok(())
}

fn load(path: &Path, config: &Config) -> anyhow::Result<(Vec<i64>, Histogram)> {
    let values = read_values(path, &config.input)
        .with_context(|| format!("reading {}", path.display()))?;
    let hist = bin_histogram(&values);
    debug!(values = values.len(), "binned input");
    Ok((values, hist))
}

fn run_bin(path: &Path, config: &Config) -> anyhow::Result<()> {
    let (_, hist) = load(path, config)?;
    println!("{}", format_literal(&hist));
    Ok(())
}

fn run_summary(path: &Path, save: bool, config: &Config) -> anyhow::Result<()> {
    let (values, hist) = load(path, config)?;
    let summary = summarize(&values, &hist);
    print_summary(&summary);
    if save {
        let out_dir = Path::new(&config.export.output_dir);
        std::fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join("summary.json");
        let doc = serde_json::json!({ "source": path.display().to_string(), "summary": summary });
        std::fs::write(&out_path, serde_json::to_string_pretty(&doc)?)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}

fn run_export(path: &Path, format: Option<String>, output: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let format = format.unwrap_or_else(|| config.export.format.clone());
    if format != "json" && format != "csv" {
        anyhow::bail!("Unknown format: {format} (use json or csv)");
    }
    let (values, hist) = load(path, config)?;
    let out_path = output.unwrap_or_else(|| {
        Path::new(&config.export.output_dir).join(format!("histogram.{format}"))
    });
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
    }
    let bins = histogram_bins(&hist, value_range(&values));
    if format == "json" {
        let summary = summarize(&values, &hist);
        export_json(&out_path, &path.display().to_string(), &hist, &summary, &bins)?;
    } else {
        export_csv(&out_path, &bins)?;
    }
    println!("Exported to {}", out_path.display());
    Ok(())
}

fn run_view(path: &Path, config: &Config) -> anyhow::Result<()> {
    let (values, hist) = load(path, config)?;
    let mut app = App::new(path.display().to_string(), &values, hist, config);
    info!(values = values.len(), "opening viewer");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    let tick = Duration::from_millis(66); // 15Hz
    loop {
        let size = terminal.size()?;
        app.set_capacity(fit_buckets(size.width, app.bar_width));
        terminal.draw(|f| render(f, app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press { handle_key(app, key); }
            }
        }
        if app.should_quit { break; }
    }
    Ok(())
}
