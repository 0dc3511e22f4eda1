use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{RankingParams, RankingResponse, StageListItem, points_label};
use crate::domain::Selection;
use super::{AppState, error_response};

pub async fn get_competitions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.competitions().to_vec())
}

pub async fn get_stages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let stages = match state.service.stages(&id).await {
        Ok(stages) => stages,
        Err(e) => return error_response(e),
    };

    let items: Vec<StageListItem> = stages
        .into_iter()
        .map(|stage| StageListItem {
            player_count: stage.players.len(),
            id: stage.id,
            name: stage.name,
            sheet_name: stage.sheet_name,
        })
        .collect();

    Json(items).into_response()
}

pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let selection = Selection {
        competition: id,
        stage: params.stage.filter(|s| !s.is_empty()),
    };

    match state.service.ranking(&selection).await {
        Ok(entries) => Json(RankingResponse {
            points_label: points_label(selection.stage.as_deref()),
            competition: selection.competition,
            stage: selection.stage,
            entries,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.summary(&id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_photos(
    State(state): State<Arc<AppState>>,
    Path((id, stage_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.service.photos(&id, &stage_id).await {
        Ok(photos) => Json(photos).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn refresh_competition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.refresh(&id).await {
        Ok(()) => (StatusCode::ACCEPTED, "Refresh triggered").into_response(),
        Err(e) => error_response(e),
    }
}
