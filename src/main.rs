use anyhow::Result;

use challenge_dashboard::cli::{Cli, Command};
use challenge_dashboard::{
    handle_completions, handle_leaderboard, handle_report, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Serve { port } => handle_serve(&cli.config, *port),
        Command::Report { json } => handle_report(&cli.config, *json),
        Command::Leaderboard { board } => handle_leaderboard(&cli.config, *board),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
