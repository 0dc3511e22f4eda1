use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::services::leaderboard::{LeaderboardService, UnknownCompetition};

pub mod competitions;

pub struct AppState {
    pub service: LeaderboardService,
}

/// Unknown competitions are a 404, anything else a generic 500
pub fn error_response(e: anyhow::Error) -> Response {
    if let Some(unknown) = e.downcast_ref::<UnknownCompetition>() {
        return (StatusCode::NOT_FOUND, unknown.to_string()).into_response();
    }

    error!("Leaderboard pipeline failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load leaderboard data").into_response()
}
