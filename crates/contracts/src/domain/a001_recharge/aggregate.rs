use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;
use crate::shared::review::{ReviewDecision, ReviewStatus};
use crate::shared::Identified;

/// Wallet top-up submitted by a user, waiting for an operator to confirm the
/// incoming payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeRequest {
    pub id: i64,
    pub user: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub proof_image: Option<String>,
    pub status: ReviewStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

impl Identified for RechargeRequest {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl RechargeRequest {
    pub fn requester(&self) -> String {
        self.user_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.user_email.clone())
            .unwrap_or_else(|| format!("#{}", self.user))
    }

    /// Reflects an accepted decision locally until the list is refetched.
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

    const SAMPLE: &str = r#"{
        "id": 42,
        "user": 7,
        "user_email": "client@mail.tg",
        "user_name": "",
        "amount": "5000.00",
        "payment_method": "flooz",
        "status": "pending",
        "created_at": "2024-05-01T10:00:00Z"
    }"#;

    #[test]
    fn test_decode() {
        let r: RechargeRequest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(r.record_id(), 42);
        assert_eq!(r.amount, 5000.0);
        assert!(r.status.requires_action());
        assert_eq!(r.requester(), "client@mail.tg");
    }

    #[test]
    fn test_apply_review() {
        let mut r: RechargeRequest = serde_json::from_str(SAMPLE).unwrap();
        r.apply_review(ReviewDecision::Reject, "  preuve illisible ");
        assert_eq!(r.status, ReviewStatus::Rejected);
        assert_eq!(r.admin_notes.as_deref(), Some("preuve illisible"));

        r.apply_review(ReviewDecision::Approve, "");
        assert_eq!(r.status, ReviewStatus::Approved);
        assert_eq!(r.admin_notes.as_deref(), Some("preuve illisible"));
    }
}
