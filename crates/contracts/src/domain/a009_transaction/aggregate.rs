use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;
use crate::shared::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    #[serde(other)]
    Other,
}

impl TransactionType {
    pub const FILTERABLE: [TransactionType; 2] =
        [TransactionType::Deposit, TransactionType::Withdrawal];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Dépôt",
            TransactionType::Withdrawal => "Retrait",
            TransactionType::Other => "Autre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    pub const FILTERABLE: [TransactionStatus; 4] = [
        TransactionStatus::Pending,
        TransactionStatus::Success,
        TransactionStatus::Failed,
        TransactionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
            TransactionStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "En cours",
            TransactionStatus::Success => "Réussie",
            TransactionStatus::Failed => "Échouée",
            TransactionStatus::Cancelled => "Annulée",
            TransactionStatus::Unknown => "Inconnu",
        }
    }
}

/// Deposit or withdrawal executed through a platform cash desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub reference: String,
    #[serde(rename = "type_trans")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(default)]
    pub user_app_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub created_at: String,
}

impl Identified for Transaction {
    fn record_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let json = r#"{
            "id": 1200,
            "reference": "TX-1200",
            "type_trans": "withdrawal",
            "status": "success",
            "amount": 2500,
            "phone_number": "+22890112233",
            "platform_name": "1xBet",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.kind, TransactionType::Withdrawal);
        assert_eq!(t.status, TransactionStatus::Success);
        assert_eq!(t.amount, 2500.0);
    }

    #[test]
    fn test_unknown_variants() {
        let kind: TransactionType = serde_json::from_str(r#""bonus""#).unwrap();
        assert_eq!(kind, TransactionType::Other);
        let status: TransactionStatus = serde_json::from_str(r#""queued""#).unwrap();
        assert_eq!(status, TransactionStatus::Unknown);
    }
}
