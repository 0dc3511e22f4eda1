use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::services::leaderboard::LeaderboardService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let service = LeaderboardService::new(self.config.clone())?;
        let state = Arc::new(AppState { service });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
