use serde::{Deserialize, Serialize};

/// Lifecycle of requests that an operator must approve or reject
/// (recharges, cancellations).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Expired,
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    pub const FILTERABLE: [ReviewStatus; 4] = [
        ReviewStatus::Pending,
        ReviewStatus::Approved,
        ReviewStatus::Rejected,
        ReviewStatus::Expired,
    ];

    /// Only pending requests wait for an operator decision.
    pub fn requires_action(&self) -> bool {
        matches!(self, ReviewStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
            ReviewStatus::Expired => "expired",
            ReviewStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "En attente",
            ReviewStatus::Approved => "Approuvée",
            ReviewStatus::Rejected => "Rejetée",
            ReviewStatus::Expired => "Expirée",
            ReviewStatus::Unknown => "Inconnu",
        }
    }
}

/// Operator verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Status the request ends up in once the server accepted the decision.
    pub fn resulting_status(&self) -> ReviewStatus {
        match self {
            ReviewDecision::Approve => ReviewStatus::Approved,
            ReviewDecision::Reject => ReviewStatus::Rejected,
        }
    }

    pub fn action_path(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }
}

/// Body of `POST .../{id}/approve/` and `POST .../{id}/reject/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub admin_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decoding() {
        let s: ReviewStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(s, ReviewStatus::Pending);
        let s: ReviewStatus = serde_json::from_str(r#""on_hold""#).unwrap();
        assert_eq!(s, ReviewStatus::Unknown);
    }

    #[test]
    fn test_requires_action() {
        assert!(ReviewStatus::Pending.requires_action());
        assert!(!ReviewStatus::Approved.requires_action());
        assert!(!ReviewDecision::Reject.resulting_status().requires_action());
    }

    #[test]
    fn test_empty_notes_not_serialized() {
        let body = serde_json::to_string(&ReviewRequest::default()).unwrap();
        assert_eq!(body, "{}");
        let body = serde_json::to_string(&ReviewRequest {
            admin_notes: "ok".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"admin_notes":"ok"}"#);
    }
}
