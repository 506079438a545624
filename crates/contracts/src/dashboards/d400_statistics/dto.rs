use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub new_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub today: u64,
    #[serde(default, deserialize_with = "de_amount")]
    pub deposits_amount: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub withdrawals_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RechargeStats {
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default, deserialize_with = "de_amount")]
    pub pending_amount: f64,
    #[serde(default)]
    pub approved_today: u64,
    #[serde(default)]
    pub rejected_today: u64,
}

impl RechargeStats {
    /// Any non-zero pending count, or a positive pending amount.
    pub fn has_pending(&self) -> bool {
        self.pending_count != 0 || self.pending_amount > 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
}

/// `GET statistics/overview/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsOverview {
    #[serde(default)]
    pub users: UserStats,
    #[serde(default)]
    pub transactions: TransactionStats,
    #[serde(default)]
    pub recharges: RechargeStats,
    #[serde(default)]
    pub pending_cancellations: u64,
    #[serde(default)]
    pub platforms: PlatformCounts,
}

impl StatisticsOverview {
    /// Alert condition of the "pending recharges" banner.
    pub fn has_pending_recharges(&self) -> bool {
        self.recharges.has_pending()
    }
}

/// One day of `GET statistics/transactions/daily/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTransactionPoint {
    pub date: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "de_amount")]
    pub deposits: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub withdrawals: f64,
}

/// `GET statistics/platforms/` ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformVolume {
    pub platform_name: String,
    #[serde(default)]
    pub transactions: u64,
    #[serde(default, deserialize_with = "de_amount")]
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overview_decodes() {
        let json = r#"{"users": {"total": 10}, "recharges": {"pending_count": 2}}"#;
        let overview: StatisticsOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.users.total, 10);
        assert_eq!(overview.users.active, 0);
        assert!(overview.has_pending_recharges());
    }

    #[test]
    fn test_pending_alert() {
        let mut overview = StatisticsOverview::default();
        assert!(!overview.has_pending_recharges());
        overview.recharges.pending_amount = 1500.0;
        assert!(overview.has_pending_recharges());
    }
}
