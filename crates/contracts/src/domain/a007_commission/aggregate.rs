use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;
use crate::shared::Identified;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    #[default]
    Pending,
    Paid,
    #[serde(other)]
    Unknown,
}

impl CommissionStatus {
    pub const FILTERABLE: [CommissionStatus; 2] = [CommissionStatus::Pending, CommissionStatus::Paid];

    pub fn requires_action(&self) -> bool {
        matches!(self, CommissionStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "pending",
            CommissionStatus::Paid => "paid",
            CommissionStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "À payer",
            CommissionStatus::Paid => "Payée",
            CommissionStatus::Unknown => "Inconnu",
        }
    }
}

/// Commission earned by an agent over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub id: i64,
    pub agent: i64,
    #[serde(default)]
    pub agent_email: Option<String>,
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    pub status: CommissionStatus,
    #[serde(default)]
    pub period_start: Option<String>,
    #[serde(default)]
    pub period_end: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for Commission {
    fn record_id(&self) -> i64 {
        self.id
    }
}

/// `POST commissions/{id}/pay/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayCommissionDto {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payment_reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let json = r#"{"id": 1, "agent": 4, "amount": "750.5", "status": "pending"}"#;
        let c: Commission = serde_json::from_str(json).unwrap();
        assert!(c.status.requires_action());
        assert_eq!(c.amount, 750.5);
    }
}
