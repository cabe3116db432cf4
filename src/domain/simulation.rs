use serde::{Deserialize, Serialize};

/// Output of one engine run. Monetary values are raw f64 with no currency
/// rounding; rounding for display belongs to the report renderer. The cost
/// breakdown fields (`labor_cost_manual`, `auto_cost`, `error_savings`) feed
/// the report's breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    pub error_savings: f64,
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_as_plain_json_numbers() {
        let result = SimulationResult {
            labor_cost_manual: 30_600.0,
            auto_cost: 400.0,
            error_savings: 800.0,
            monthly_savings: 34_100.0,
            cumulative_savings: 1_227_600.0,
            net_savings: 1_177_600.0,
            payback_months: 1.47,
            roi_percentage: 2355.2,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["monthlySavings"], serde_json::json!(34_100.0));
        assert!(json["roiPercentage"].is_number());
    }
}
