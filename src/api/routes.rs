use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    AppState,
    competitions::{get_competitions, get_photos, get_ranking, get_stages, get_summary, refresh_competition},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/competitions", get(get_competitions))
        .route("/api/competitions/:id/stages", get(get_stages))
        .route("/api/competitions/:id/ranking", get(get_ranking))
        .route("/api/competitions/:id/summary", get(get_summary))
        .route("/api/competitions/:id/stages/:stage_id/photos", get(get_photos))
        .route("/api/competitions/:id/refresh", post(refresh_competition))
        .with_state(state)
}
