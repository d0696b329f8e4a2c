use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreBreakdown, Tier};

/// One prospect row as uploaded. Every column is optional; missing columns
/// deserialize to empty strings and unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default = "unknown_company")]
    pub company_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub source: String,
    /// Semicolon-delimited.
    #[serde(default)]
    pub services: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub employee_estimate: String,
    #[serde(default)]
    pub project_count: String,
    #[serde(default)]
    pub has_trade_program: String,
    #[serde(default)]
    pub has_procurement_page: String,
}

fn unknown_company() -> String {
    "Unknown".to_string()
}

/// Wire form of a breakdown, with the derived total spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScoreBreakdown {
    pub industry_fit: i32,
    pub product_match: i32,
    pub digital_signal: i32,
    pub scale_signal: i32,
    pub intent_signal: i32,
    pub penalties: i32,
    pub total: i32,
}

impl From<ScoreBreakdown> for LeadScoreBreakdown {
    fn from(b: ScoreBreakdown) -> Self {
        Self {
            industry_fit: b.industry_fit,
            product_match: b.product_match,
            digital_signal: b.digital_signal,
            scale_signal: b.scale_signal,
            intent_signal: b.intent_signal,
            penalties: b.penalties,
            total: b.total(),
        }
    }
}

/// A scored, drafted lead as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResult {
    pub company_name: String,
    pub city: String,
    pub state: String,
    pub website: String,
    pub source: String,
    pub services: String,
    pub description: String,
    pub score: i32,
    pub tier: Tier,
    pub reason: String,
    pub outreach_subject: String,
    pub outreach_message: String,
    pub breakdown: LeadScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_default_to_empty() {
        let record: LeadRecord =
            serde_json::from_value(serde_json::json!({ "city": "Phoenix" })).unwrap();
        assert_eq!(record.company_name, "Unknown");
        assert_eq!(record.city, "Phoenix");
        assert_eq!(record.employee_estimate, "");
    }

    #[test]
    fn test_breakdown_wire_form_includes_total() {
        let breakdown = ScoreBreakdown {
            industry_fit: 30,
            product_match: 10,
            digital_signal: 5,
            scale_signal: 8,
            intent_signal: 4,
            penalties: -7,
        };
        let wire = LeadScoreBreakdown::from(breakdown);
        assert_eq!(wire.total, 50);
        assert_eq!(wire.penalties, -7);
    }
}
