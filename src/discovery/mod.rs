use anyhow::Result;
use log::info;

use crate::domain::StageRecord;
use crate::sheets::SheetLoader;

/// Outcome of probing a single stage index
#[derive(Debug)]
pub enum Probe {
    Accepted(StageRecord),
    Stopped,
}

/// Finds the stage sheets of a competition by probing `1, 2, 3, ...`
pub struct StageDiscovery<'a> {
    loader: &'a SheetLoader,
    max_stages: usize,
}

impl<'a> StageDiscovery<'a> {
    pub fn new(loader: &'a SheetLoader, max_stages: usize) -> Self {
        Self { loader, max_stages }
    }

    /// Load stages in order until the first missing one.
    ///
    /// Fetches are strictly sequential since each decides whether the next
    /// one happens. Nothing past a gap is ever probed.
    pub async fn discover(&self, competition: &str, spreadsheet_id: &str) -> Result<Vec<StageRecord>> {
        info!("Discovering stages for {}", competition);
        let mut stages = Vec::new();

        for index in 1..=self.max_stages {
            match self.probe(competition, spreadsheet_id, index).await? {
                Probe::Accepted(stage) => {
                    info!("  → {} ({} players)", stage.name, stage.players.len());
                    stages.push(stage);
                }
                Probe::Stopped => {
                    info!("  → No stage at index {}, stopping", index);
                    break;
                }
            }
        }

        if stages.len() == self.max_stages {
            info!("  → Reached the limit of {} stages", self.max_stages);
        }

        info!("Found {} stages for {}", stages.len(), competition);
        Ok(stages)
    }

    pub async fn probe(&self, competition: &str, spreadsheet_id: &str, index: usize) -> Result<Probe> {
        let probe = match self.loader.load_stage(spreadsheet_id, index).await? {
            Some(players) => {
                let sheet_name = self.loader.sheet_name(index);
                Probe::Accepted(StageRecord::new(competition, index, sheet_name, players))
            }
            None => Probe::Stopped,
        };
        Ok(probe)
    }
}

/// Convenience wrapper over [`StageDiscovery::discover`]
pub async fn discover_stages(
    loader: &SheetLoader,
    competition: &str,
    spreadsheet_id: &str,
    max_stages: usize,
) -> Result<Vec<StageRecord>> {
    StageDiscovery::new(loader, max_stages)
        .discover(competition, spreadsheet_id)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::SheetSource;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const SHEET: &str = "Rank,Player,Points\n1,Alice,10\n2,Bob,5\n";

    /// Serves the given tabs and records every requested name
    struct RecordingSource {
        sheets: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl RecordingSource {
        fn with_sheets(names: &[&str]) -> Self {
            Self {
                sheets: names.iter().map(|n| (n.to_string(), SHEET.to_string())).collect(),
                requested: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SheetSource for RecordingSource {
        async fn fetch_sheet_text(&self, _spreadsheet_id: &str, sheet_name: &str) -> Result<Option<String>> {
            self.requested.lock().unwrap().push(sheet_name.to_string());
            if self.fail_on.as_deref() == Some(sheet_name) {
                anyhow::bail!("connection pool exhausted");
            }
            Ok(self.sheets.get(sheet_name).cloned())
        }
    }

    fn loader(source: Arc<RecordingSource>) -> SheetLoader {
        SheetLoader::new(source, "ETAPA").unwrap()
    }

    #[tokio::test]
    async fn test_stops_at_first_gap() {
        let source = Arc::new(RecordingSource::with_sheets(&["ETAPA1", "ETAPA2", "ETAPA4"]));
        let loader = loader(source.clone());

        let stages = discover_stages(&loader, "sf6", "sheet", 20).await.unwrap();

        let ids: Vec<_> = stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sf6-etapa-1", "sf6-etapa-2"]);
        assert_eq!(source.requested(), vec!["ETAPA1", "ETAPA2", "ETAPA3"]);
    }

    #[tokio::test]
    async fn test_stage_records_are_labelled() {
        let source = Arc::new(RecordingSource::with_sheets(&["ETAPA1"]));
        let loader = loader(source);

        let stages = discover_stages(&loader, "2xko", "sheet", 20).await.unwrap();

        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].name, "Stage 01");
        assert_eq!(stages[0].sheet_name, "ETAPA1");
        assert_eq!(stages[0].players.len(), 2);
    }

    #[tokio::test]
    async fn test_respects_max_stages() {
        let source = Arc::new(RecordingSource::with_sheets(&["ETAPA1", "ETAPA2", "ETAPA3", "ETAPA4"]));
        let loader = loader(source.clone());

        let stages = discover_stages(&loader, "sf6", "sheet", 3).await.unwrap();

        assert_eq!(stages.len(), 3);
        assert_eq!(source.requested().len(), 3);
    }

    #[tokio::test]
    async fn test_no_stages_is_not_an_error() {
        let source = Arc::new(RecordingSource::with_sheets(&[]));
        let loader = loader(source);

        let stages = discover_stages(&loader, "sf6", "sheet", 20).await.unwrap();
        assert!(stages.is_empty());
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let mut source = RecordingSource::with_sheets(&["ETAPA1", "ETAPA2"]);
        source.fail_on = Some("ETAPA2".to_string());
        let loader = loader(Arc::new(source));

        let result = discover_stages(&loader, "sf6", "sheet", 20).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_probe_reports_stop() {
        let source = Arc::new(RecordingSource::with_sheets(&["ETAPA1"]));
        let loader = loader(source);
        let discovery = StageDiscovery::new(&loader, 20);

        assert!(matches!(discovery.probe("sf6", "sheet", 1).await.unwrap(), Probe::Accepted(_)));
        assert!(matches!(discovery.probe("sf6", "sheet", 2).await.unwrap(), Probe::Stopped));
    }
}
