pub mod aggregation;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::aggregation::Board;
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(config_path: &Path, port: u16) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_report(config_path: &Path, json: bool) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::from_config(&config)?;
        service.run(json).await
    })
}

pub fn handle_leaderboard(config_path: &Path, board: Board) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::from_config(&config)?;
        service.run_board(board).await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
