use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::error::ApiError;
use crate::domain::{Scenario, ScenarioInput};
use crate::state::AppState;

/// Request to save a named scenario: a name plus the input fields inline.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScenarioRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub input: ScenarioInput,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// POST /api/v1/scenarios - Save a scenario
pub async fn create_scenario(
    State(st): State<AppState>,
    Json(request): Json<CreateScenarioRequest>,
) -> Result<Json<Scenario>, ApiError> {
    request.validate()?;
    let scenario = st.store.create(request.name, request.input).await?;
    tracing::info!(id = %scenario.id, name = %scenario.name, "scenario saved");
    Ok(Json(scenario))
}

/// GET /api/v1/scenarios - List saved scenarios in insertion order
pub async fn list_scenarios(
    State(st): State<AppState>,
) -> Result<Json<Vec<Scenario>>, ApiError> {
    Ok(Json(st.store.list().await?))
}

/// GET /api/v1/scenarios/:id
pub async fn get_scenario(
    State(st): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Scenario>, ApiError> {
    Ok(Json(st.store.get(id).await?))
}

/// PUT or PATCH /api/v1/scenarios/:id - Full replacement of the stored input
pub async fn update_scenario(
    State(st): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ScenarioInput>,
) -> Result<Json<Scenario>, ApiError> {
    input.validate()?;
    let scenario = st.store.update(id, input).await?;
    tracing::info!(id = %scenario.id, "scenario updated");
    Ok(Json(scenario))
}

/// DELETE /api/v1/scenarios/:id
pub async fn delete_scenario(
    State(st): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    st.store.delete(id).await?;
    tracing::info!(%id, "scenario deleted");
    Ok(Json(DeleteResponse { deleted: true }))
}
