pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{LeadRecord, Scenario, ScenarioInput};

pub use memory::MemoryScenarioStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scenario {0} not found")]
    NotFound(Uuid),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Persistence seam for named scenarios and captured leads. The backing
/// technology is an implementation detail behind this trait; the default is
/// the in-process [`MemoryScenarioStore`]. Implementations must keep
/// same-id update/delete linearizable (last writer wins is fine) and must
/// return `list` in insertion order.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    async fn create(&self, name: String, input: ScenarioInput) -> Result<Scenario, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Scenario, StoreError>;

    async fn list(&self) -> Result<Vec<Scenario>, StoreError>;

    /// Full replacement of the stored input; name and id are untouched.
    async fn update(&self, id: Uuid, input: ScenarioInput) -> Result<Scenario, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn record_lead(&self, lead: LeadRecord) -> Result<(), StoreError>;
}
