use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::error::ApiError;
use crate::domain::{LeadRecord, ScenarioInput};
use crate::engine;
use crate::state::AppState;

/// Email-gated report request: either a saved scenario id or a full input
/// set inline, never neither.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub scenario_id: Option<Uuid>,
    #[validate(nested)]
    pub input: Option<ScenarioInput>,
}

/// POST /api/v1/report/generate - Render the downloadable report
///
/// The email is captured as a lead before the document is rendered; the
/// capture failing fails the request, a lost lead is worse than a retried
/// download.
pub async fn generate_report(
    State(st): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Response, ApiError> {
    request.validate()?;

    let (scenario_name, input) = match (request.scenario_id, request.input) {
        (Some(id), _) => {
            let scenario = st.store.get(id).await?;
            (scenario.name, scenario.input)
        }
        (None, Some(input)) => ("Untitled Scenario".to_string(), input),
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either scenarioId or input must be provided".to_string(),
            ))
        }
    };

    let result = engine::simulate(&input, &st.cfg.engine)?;

    st.store
        .record_lead(LeadRecord {
            email: request.email.clone(),
            scenario_name: scenario_name.clone(),
            requested_at: Utc::now(),
        })
        .await?;
    tracing::info!(email = %request.email, scenario = %scenario_name, "report lead captured");

    let document = st
        .renderer
        .render(&result, &input, &scenario_name, &request.email, Utc::now())?;
    let file_name = st.renderer.file_name(&scenario_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        document,
    )
        .into_response())
}
