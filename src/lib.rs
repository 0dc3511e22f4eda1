pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod http;
pub mod parsing;
pub mod rate_limiter;
pub mod ranking;
pub mod services;
pub mod sheets;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::Selection;
use crate::services::leaderboard::LeaderboardService;
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_competitions() -> Result<()> {
    print!("{}", report::format_competitions(&config::get_competitions()));
    Ok(())
}

pub fn handle_stages(competition: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = LeaderboardService::new(AppConfig::new())?;
        let stages = service.stages(competition).await?;
        print!("{}", report::format_stages(&stages));
        Ok(())
    })
}

pub fn handle_ranking(competition: &str, stage: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = LeaderboardService::new(AppConfig::new())?;
        let selection = Selection {
            competition: competition.to_string(),
            stage: stage.map(str::to_string),
        };

        let meta = service.competition(competition)?;
        println!("{} {} - {}\n", meta.icon, meta.title, meta.subtitle);

        let entries = service.ranking(&selection).await?;
        print!("{}", report::format_ranking(&entries, stage));

        if selection.is_overall() {
            let summary = service.summary(competition).await?;
            print!("\n{}", report::format_summary(&summary));
        }
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
