use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config.ui);
    let res = app.run(&mut terminal);

    // Restore terminal on all paths, even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running app")
}
