use anyhow::Result;
use log::info;
use std::fmt;
use std::sync::Arc;

use crate::cache::StageCache;
use crate::config::{AppConfig, CompetitionConfig, get_competitions};
use crate::discovery::discover_stages;
use crate::domain::{LeaderboardSummary, PhotoEntry, RankedEntry, Selection, StageRecord};
use crate::ranking;
use crate::sheets::{GoogleSheetsClient, SheetLoader, SheetSource};

/// The requested competition is not configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCompetition(pub String);

impl fmt::Display for UnknownCompetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown competition: {}", self.0)
    }
}

impl std::error::Error for UnknownCompetition {}

/// Runs the stage pipeline for the configured competitions.
///
/// Holds no selection state: every call says which competition and stage it
/// is about.
pub struct LeaderboardService {
    config: AppConfig,
    competitions: Vec<CompetitionConfig>,
    loader: SheetLoader,
    cache: StageCache,
}

impl LeaderboardService {
    /// Service backed by the spreadsheet CSV export
    pub fn new(config: AppConfig) -> Result<Self> {
        let source = Arc::new(GoogleSheetsClient::new(&config.sheets)?);
        Self::with_source(config, get_competitions(), source)
    }

    pub fn with_source(
        config: AppConfig,
        competitions: Vec<CompetitionConfig>,
        source: Arc<dyn SheetSource>,
    ) -> Result<Self> {
        let loader = SheetLoader::new(source, config.sheets.sheet_prefix.clone())?;
        let cache = StageCache::new(config.discovery.cache_ttl_secs);

        Ok(Self {
            config,
            competitions,
            loader,
            cache,
        })
    }

    pub fn competitions(&self) -> &[CompetitionConfig] {
        &self.competitions
    }

    pub fn competition(&self, id: &str) -> Result<&CompetitionConfig> {
        self.competitions
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| UnknownCompetition(id.to_string()).into())
    }

    /// Stages of a competition, served from cache while fresh
    pub async fn stages(&self, competition_id: &str) -> Result<Vec<StageRecord>> {
        let competition = self.competition(competition_id)?;
        let max_stages = self.config.discovery.max_stages;

        self.cache
            .get_or_discover(competition.id, || {
                discover_stages(&self.loader, competition.id, competition.spreadsheet_id, max_stages)
            })
            .await
    }

    pub async fn ranking(&self, selection: &Selection) -> Result<Vec<RankedEntry>> {
        let stages = self.stages(&selection.competition).await?;
        Ok(ranking::aggregate(&stages, selection.stage.as_deref()))
    }

    pub async fn summary(&self, competition_id: &str) -> Result<LeaderboardSummary> {
        let stages = self.stages(competition_id).await?;
        Ok(ranking::summarize(&stages))
    }

    pub async fn photos(&self, competition_id: &str, stage_id: &str) -> Result<Vec<PhotoEntry>> {
        let stages = self.stages(competition_id).await?;
        Ok(ranking::stage_photos(&stages, stage_id))
    }

    /// Drop cached stages so the next request rediscovers them
    pub async fn refresh(&self, competition_id: &str) -> Result<()> {
        let competition = self.competition(competition_id)?;
        self.cache.invalidate(competition.id).await;
        info!("Refresh requested for {}", competition.id);
        Ok(())
    }
}
