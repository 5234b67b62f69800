//! Tic Tac Toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_term::{App, Cli, Command, Muted, Settings, SoundPlayer, TerminalBell};
use tictactoe_term::{logging, script, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    if cli.mute {
        settings = settings.muted();
    }
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    match cli.command.unwrap_or_default() {
        Command::Play { x_name, o_name } => run_play(&settings, x_name, o_name),
        Command::Script {
            moves,
            x_name,
            o_name,
        } => run_script(&moves, x_name, o_name),
    }
}

/// Run the interactive game
fn run_play(settings: &Settings, x_name: Option<String>, o_name: Option<String>) -> Result<()> {
    logging::init_file(settings.log_file())?;
    info!(?settings, "Starting interactive play");

    let sound: Box<dyn SoundPlayer> = if *settings.sound() {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Muted)
    };

    let app = App::new(settings, sound).with_names(
        x_name.as_deref().unwrap_or_default(),
        o_name.as_deref().unwrap_or_default(),
    );
    terminal::run(app)
}

/// Run a scripted game and print the report
fn run_script(moves: &[usize], x_name: Option<String>, o_name: Option<String>) -> Result<()> {
    logging::init_stderr();

    let report = script::run(
        x_name.as_deref().unwrap_or_default(),
        o_name.as_deref().unwrap_or_default(),
        moves,
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
