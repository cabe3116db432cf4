//! HTML report rendering. Display rounding lives here, not in the engine:
//! the template receives preformatted strings so the document is the only
//! place currency formatting decisions exist.

use askama::Template;
use chrono::{DateTime, Utc};
use thiserror::Error;
use validator::ValidateEmail;

use crate::domain::{ScenarioInput, SimulationResult};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    scenario_name: &'a str,
    email: &'a str,
    generated_on: String,
    monthly_savings: String,
    payback_months: String,
    roi_percentage: String,
    net_savings: String,
    cumulative_savings: String,
    labor_cost_manual: String,
    auto_cost: String,
    error_savings: String,
    time_horizon_months: String,
    monthly_invoice_volume: String,
    num_ap_staff: String,
    avg_hours_per_invoice: String,
    hourly_wage: String,
    error_rate_manual: String,
    error_cost: String,
    one_time_implementation_cost: String,
}

/// Renders downloadable ROI report documents.
#[derive(Debug, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Produce the report document bytes for a computed result. Fails before
    /// touching the template when `email` is not a syntactically valid
    /// address; lead capture is the caller's concern.
    pub fn render(
        &self,
        result: &SimulationResult,
        input: &ScenarioInput,
        scenario_name: &str,
        email: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<u8>, RenderError> {
        if !email.validate_email() {
            return Err(RenderError::InvalidEmail(email.to_string()));
        }

        let template = ReportTemplate {
            scenario_name,
            email,
            generated_on: generated_at.format("%B %d, %Y").to_string(),
            monthly_savings: money(result.monthly_savings),
            payback_months: format!("{:.1} months", result.payback_months),
            roi_percentage: format!("{:.1}%", result.roi_percentage),
            net_savings: money(result.net_savings),
            cumulative_savings: money(result.cumulative_savings),
            labor_cost_manual: money(result.labor_cost_manual),
            auto_cost: money(result.auto_cost),
            error_savings: money(result.error_savings),
            time_horizon_months: input.time_horizon_months.to_string(),
            monthly_invoice_volume: format!("{:.0}", input.monthly_invoice_volume),
            num_ap_staff: input.num_ap_staff.to_string(),
            avg_hours_per_invoice: format!("{:.2}", input.avg_hours_per_invoice),
            hourly_wage: money(input.hourly_wage),
            error_rate_manual: format!("{:.2}%", input.error_rate_manual * 100.0),
            error_cost: money(input.error_cost),
            one_time_implementation_cost: money(input.one_time_implementation_cost),
        };
        Ok(template.render()?.into_bytes())
    }

    /// Attachment file name derived from the scenario name, whitespace
    /// flattened so the header never needs escaping.
    pub fn file_name(&self, scenario_name: &str) -> String {
        let safe: String = scenario_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("roi_report_{safe}.html")
    }
}

/// `$1,234,567.89` style currency formatting.
fn money(value: f64) -> String {
    let negative = value < 0.0;
    let raw = format!("{:.2}", value.abs());
    let (whole, cents) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let whole: String = grouped.chars().rev().collect();

    if negative {
        format!("-${whole}.{cents}")
    } else {
        format!("${whole}.{cents}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ScenarioInput {
        ScenarioInput {
            monthly_invoice_volume: 2000.0,
            num_ap_staff: 3,
            hourly_wage: 30.0,
            avg_hours_per_invoice: 0.17,
            automated_cost_per_invoice: 0.20,
            error_rate_manual: 0.005,
            error_rate_auto: 0.001,
            error_cost: 100.0,
            time_horizon_months: 36,
            one_time_implementation_cost: 50_000.0,
            bias_factor: None,
        }
    }

    fn sample_result() -> SimulationResult {
        SimulationResult {
            labor_cost_manual: 30_600.0,
            auto_cost: 400.0,
            error_savings: 800.0,
            monthly_savings: 34_100.0,
            cumulative_savings: 1_227_600.0,
            net_savings: 1_177_600.0,
            payback_months: 1.4662,
            roi_percentage: 2355.2,
        }
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(34_100.0), "$34,100.00");
        assert_eq!(money(1_227_600.5), "$1,227,600.50");
        assert_eq!(money(999.0), "$999.00");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(-1100.0), "-$1,100.00");
    }

    #[test]
    fn rendered_report_contains_key_figures() {
        let renderer = ReportRenderer::new();
        let bytes = renderer
            .render(
                &sample_result(),
                &sample_input(),
                "Q3 baseline",
                "ap.lead@example.com",
                Utc::now(),
            )
            .unwrap();
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("Q3 baseline"));
        assert!(html.contains("ap.lead@example.com"));
        assert!(html.contains("$34,100.00"));
        assert!(html.contains("1.5 months"));
        assert!(html.contains("2355.2%"));
        assert!(html.contains("$30,600.00"));
        assert!(html.contains("0.50%"));
        assert!(html.contains("$50,000.00"));
    }

    #[test]
    fn invalid_email_is_rejected_before_rendering() {
        let renderer = ReportRenderer::new();
        let err = renderer
            .render(
                &sample_result(),
                &sample_input(),
                "Q3 baseline",
                "not-an-email",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidEmail(_)));
    }

    #[test]
    fn file_name_is_header_safe() {
        let renderer = ReportRenderer::new();
        assert_eq!(
            renderer.file_name("Q3 baseline (draft)"),
            "roi_report_Q3_baseline__draft_.html"
        );
    }
}
