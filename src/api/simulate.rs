use axum::{extract::State, Json};

use crate::api::error::ApiError;
use crate::domain::{ScenarioInput, SimulationResult};
use crate::engine;
use crate::state::AppState;

/// POST /api/v1/simulate - Run the projection without persisting anything
pub async fn run_simulation(
    State(st): State<AppState>,
    Json(input): Json<ScenarioInput>,
) -> Result<Json<SimulationResult>, ApiError> {
    let result = engine::simulate(&input, &st.cfg.engine)?;
    Ok(Json(result))
}
