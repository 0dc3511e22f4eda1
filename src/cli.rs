use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "fight-stats-hub leaderboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the leaderboard API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// List the configured competitions
    Competitions,
    /// Discover and list the stages of a competition
    Stages {
        /// Competition id, e.g. "sf6"
        competition: String,
    },
    /// Print the leaderboard of a competition
    Ranking {
        /// Competition id, e.g. "sf6"
        competition: String,
        /// Stage id to rank on its own (overall view when omitted)
        #[arg(short, long)]
        stage: Option<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
