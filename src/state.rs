use std::sync::Arc;

use crate::config::Config;
use crate::report::ReportRenderer;
use crate::store::{MemoryScenarioStore, ScenarioStore};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub store: Arc<dyn ScenarioStore>,
    pub renderer: Arc<ReportRenderer>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            store: Arc::new(MemoryScenarioStore::new()),
            renderer: Arc::new(ReportRenderer::new()),
        }
    }

    /// Same state with a caller-supplied store. Tests use this to reach the
    /// store directly behind the handlers.
    pub fn with_store(cfg: Config, store: Arc<dyn ScenarioStore>) -> Self {
        Self {
            cfg,
            store,
            renderer: Arc::new(ReportRenderer::new()),
        }
    }
}
