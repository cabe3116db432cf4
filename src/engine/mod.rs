//! ROI simulation engine.
//!
//! Pure function from [`ScenarioInput`] to [`SimulationResult`]: no state,
//! no I/O, no randomness. The bias factor deliberately inflates savings so
//! automation never looks worse than the raw numbers would make it; it is
//! multiplicative only and never clamps a negative result to a floor.

use thiserror::Error;
use validator::Validate;

use crate::config::EngineConfig;
use crate::domain::{ScenarioInput, SimulationResult};

/// Reference bias applied when neither the request nor the config override it.
pub const DEFAULT_BIAS_FACTOR: f64 = 1.1;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("invalid input: {0}")]
    Constraint(&'static str),

    #[error("monthly savings is exactly zero, payback period is undefined for this input")]
    DivisionByZero,
}

/// Run the fixed five-formula projection.
///
/// The sequence and its edge cases:
/// 1. manual labor cost = staff x wage x hours/invoice x volume
/// 2. automation cost = volume x cost/invoice
/// 3. error savings = (manual rate - auto rate) x volume x error cost
/// 4. monthly savings = (labor + error savings - automation cost) x bias
/// 5. cumulative, net, payback and ROI over the horizon
///
/// Fails with [`EngineError::DivisionByZero`] when monthly savings lands on
/// exactly zero; a negative savings flows through and yields a negative
/// payback and ROI rather than an error.
pub fn simulate(input: &ScenarioInput, cfg: &EngineConfig) -> Result<SimulationResult, EngineError> {
    input.validate()?;

    let bias_factor = input.bias_factor.unwrap_or(cfg.bias_factor);
    if bias_factor.is_nan() || bias_factor < 1.0 {
        return Err(EngineError::Constraint("biasFactor must be at least 1"));
    }

    let labor_cost_manual = input.num_ap_staff as f64
        * input.hourly_wage
        * input.avg_hours_per_invoice
        * input.monthly_invoice_volume;

    let auto_cost = input.monthly_invoice_volume * input.automated_cost_per_invoice;

    let error_savings =
        (input.error_rate_manual - input.error_rate_auto) * input.monthly_invoice_volume * input.error_cost;

    // Bias is unconditional: a negative raw saving stays negative.
    let monthly_savings = ((labor_cost_manual + error_savings) - auto_cost) * bias_factor;

    let cumulative_savings = monthly_savings * input.time_horizon_months as f64;
    let net_savings = cumulative_savings - input.one_time_implementation_cost;

    if monthly_savings == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    let payback_months = input.one_time_implementation_cost / monthly_savings;

    let roi_percentage = (net_savings / input.one_time_implementation_cost) * 100.0;

    Ok(SimulationResult {
        labor_cost_manual,
        auto_cost,
        error_savings,
        monthly_savings,
        cumulative_savings,
        net_savings,
        payback_months,
        roi_percentage,
    })
}
