use serde::{Deserialize, Serialize};

use crate::shared::review::{ReviewDecision, ReviewStatus};
use crate::shared::Identified;

/// Request to reverse a transaction. The transaction itself is loaded
/// separately when the request is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationRequest {
    pub id: i64,
    pub transaction: i64,
    #[serde(default)]
    pub transaction_reference: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub reason: String,
    pub status: ReviewStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

impl Identified for CancellationRequest {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl CancellationRequest {
    pub fn apply_review(&mut self, decision: ReviewDecision, notes: &str) {
        self.status = decision.resulting_status();
        if !notes.trim().is_empty() {
            self.admin_notes = Some(notes.trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_review() {
        let json = r#"{
            "id": 3,
            "transaction": 1200,
            "transaction_reference": "TX-1200",
            "reason": "Mauvais numéro",
            "status": "pending",
            "created_at": "2024-05-02T08:30:00Z"
        }"#;
        let mut c: CancellationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(c.transaction, 1200);
        assert!(c.status.requires_action());

        c.apply_review(ReviewDecision::Approve, "");
        assert_eq!(c.status, ReviewStatus::Approved);
        assert_eq!(c.admin_notes, None);
    }
}
