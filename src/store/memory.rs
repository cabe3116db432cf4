use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{LeadRecord, Scenario, ScenarioInput};
use crate::store::{ScenarioStore, StoreError};

/// In-process scenario store. A single writer lock per collection makes
/// update/delete on the same id linearizable; reads clone out so callers
/// never hold the lock across I/O.
#[derive(Default)]
pub struct MemoryScenarioStore {
    scenarios: RwLock<Vec<Scenario>>,
    leads: RwLock<Vec<LeadRecord>>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured leads, oldest first. Test and diagnostics accessor.
    pub async fn leads(&self) -> Vec<LeadRecord> {
        self.leads.read().await.clone()
    }
}

#[async_trait]
impl ScenarioStore for MemoryScenarioStore {
    async fn create(&self, name: String, input: ScenarioInput) -> Result<Scenario, StoreError> {
        let now = Utc::now();
        let scenario = Scenario {
            id: Uuid::new_v4(),
            name,
            input,
            created_at: now,
            updated_at: now,
        };
        self.scenarios.write().await.push(scenario.clone());
        Ok(scenario)
    }

    async fn get(&self, id: Uuid) -> Result<Scenario, StoreError> {
        self.scenarios
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Scenario>, StoreError> {
        Ok(self.scenarios.read().await.clone())
    }

    async fn update(&self, id: Uuid, input: ScenarioInput) -> Result<Scenario, StoreError> {
        let mut scenarios = self.scenarios.write().await;
        let scenario = scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        scenario.input = input;
        scenario.updated_at = Utc::now();
        Ok(scenario.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut scenarios = self.scenarios.write().await;
        let before = scenarios.len();
        scenarios.retain(|s| s.id != id);
        if scenarios.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn record_lead(&self, lead: LeadRecord) -> Result<(), StoreError> {
        self.leads.write().await.push(lead);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(volume: f64) -> ScenarioInput {
        ScenarioInput {
            monthly_invoice_volume: volume,
            num_ap_staff: 2,
            hourly_wage: 25.0,
            avg_hours_per_invoice: 0.1,
            automated_cost_per_invoice: 0.20,
            error_rate_manual: 0.005,
            error_rate_auto: 0.001,
            error_cost: 100.0,
            time_horizon_months: 36,
            one_time_implementation_cost: 10_000.0,
            bias_factor: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryScenarioStore::new();
        let created = store
            .create("baseline".to_string(), sample_input(1000.0))
            .await
            .unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "baseline");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryScenarioStore::new();
        for volume in [100.0, 200.0, 300.0] {
            store
                .create(format!("v{volume}"), sample_input(volume))
                .await
                .unwrap();
        }
        let listed = store.list().await.unwrap();
        let volumes: Vec<f64> = listed
            .iter()
            .map(|s| s.input.monthly_invoice_volume)
            .collect();
        assert_eq!(volumes, vec![100.0, 200.0, 300.0]);
    }

    #[tokio::test]
    async fn update_replaces_input_and_bumps_updated_at() {
        let store = MemoryScenarioStore::new();
        let created = store
            .create("baseline".to_string(), sample_input(1000.0))
            .await
            .unwrap();
        let updated = store.update(created.id, sample_input(5000.0)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.input.monthly_invoice_volume, 5000.0);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.input.monthly_invoice_volume, 5000.0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryScenarioStore::new();
        let created = store
            .create("baseline".to_string(), sample_input(1000.0))
            .await
            .unwrap();
        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get(created.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn operations_on_unknown_id_are_not_found() {
        let store = MemoryScenarioStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(store.get(id).await, Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update(id, sample_input(1.0)).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(id).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn leads_are_recorded_in_order() {
        let store = MemoryScenarioStore::new();
        for email in ["a@example.com", "b@example.com"] {
            store
                .record_lead(LeadRecord {
                    email: email.to_string(),
                    scenario_name: "baseline".to_string(),
                    requested_at: Utc::now(),
                })
                .await
                .unwrap();
        }
        let leads = store.leads().await;
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].email, "a@example.com");
    }

    #[tokio::test]
    async fn concurrent_creates_on_distinct_ids_do_not_interfere() {
        let store = std::sync::Arc::new(MemoryScenarioStore::new());
        let mut handles = Vec::new();
        for i in 0..16u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(format!("scenario-{i}"), sample_input(f64::from(i + 1)))
                    .await
                    .unwrap()
            }));
        }
        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }
        assert_eq!(ids.len(), 16);
        assert_eq!(store.list().await.unwrap().len(), 16);
    }
}
