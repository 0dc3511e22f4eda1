use anyhow::Result;

use fight_stats_hub::cli::Command;
use fight_stats_hub::{
    handle_competitions, handle_completions, handle_ranking, handle_serve, handle_stages, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Competitions => handle_competitions(),
        Command::Stages { competition } => handle_stages(competition),
        Command::Ranking { competition, stage } => handle_ranking(competition, stage.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
