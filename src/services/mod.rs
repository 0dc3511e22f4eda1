pub mod leaderboard;
pub mod report;
pub mod server;
