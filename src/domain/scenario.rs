use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The business inputs for one ROI simulation. Constructed once at the HTTP
/// boundary and validated before anything downstream sees it; the engine
/// re-validates so it stays safe as a pure library call.
///
/// Error rates are decimal ratios (0.005 = 0.5%), not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    #[validate(range(exclusive_min = 0.0, message = "monthlyInvoiceVolume must be positive"))]
    pub monthly_invoice_volume: f64,

    pub num_ap_staff: u32,

    #[validate(range(min = 0.0, message = "hourlyWage must not be negative"))]
    pub hourly_wage: f64,

    #[validate(range(min = 0.0, message = "avgHoursPerInvoice must not be negative"))]
    pub avg_hours_per_invoice: f64,

    #[validate(range(min = 0.0, message = "automatedCostPerInvoice must not be negative"))]
    pub automated_cost_per_invoice: f64,

    #[validate(range(min = 0.0, max = 1.0, message = "errorRateManual must be a ratio in 0..1"))]
    pub error_rate_manual: f64,

    #[validate(range(min = 0.0, max = 1.0, message = "errorRateAuto must be a ratio in 0..1"))]
    pub error_rate_auto: f64,

    #[validate(range(min = 0.0, message = "errorCost must not be negative"))]
    pub error_cost: f64,

    #[validate(range(min = 1, message = "timeHorizonMonths must be at least 1"))]
    pub time_horizon_months: u32,

    #[validate(range(
        exclusive_min = 0.0,
        message = "oneTimeImplementationCost must be positive"
    ))]
    pub one_time_implementation_cost: f64,

    /// Optional per-request override of the configured bias factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, message = "biasFactor must be at least 1"))]
    pub bias_factor: Option<f64>,
}

/// A persisted, named input set. `input` is replaced wholesale on update;
/// results are never stored since they are a pure function of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: Uuid,
    pub name: String,
    pub input: ScenarioInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lead captured when a report is requested. Kept separate from the report
/// document itself: losing the document is harmless, losing the lead is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub email: String,
    pub scenario_name: String,
    pub requested_at: DateTime<Utc>,
}
