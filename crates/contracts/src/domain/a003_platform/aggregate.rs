use serde::{Deserialize, Serialize};

use crate::shared::amount::{de_amount, de_amount_opt};
use crate::shared::validation::{require, FieldErrors};
use crate::shared::Identified;

/// Betting/gaming platform whose wallets MobCash tops up and withdraws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub is_active: bool,
    #[serde(deserialize_with = "de_amount")]
    pub min_deposit: f64,
    #[serde(deserialize_with = "de_amount")]
    pub max_deposit: f64,
    #[serde(deserialize_with = "de_amount")]
    pub min_withdrawal: f64,
    #[serde(deserialize_with = "de_amount")]
    pub max_withdrawal: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for Platform {
    fn record_id(&self) -> i64 {
        self.id
    }
}

/// Create/update form of a platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_active: bool,
    pub min_deposit: f64,
    pub max_deposit: f64,
    pub min_withdrawal: f64,
    pub max_withdrawal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

impl PlatformDto {
    pub fn from_platform(p: &Platform) -> Self {
        Self {
            name: p.name.clone(),
            image: p.image.clone(),
            is_active: p.is_active,
            min_deposit: p.min_deposit,
            max_deposit: p.max_deposit,
            min_withdrawal: p.min_withdrawal,
            max_withdrawal: p.max_withdrawal,
            city: p.city.clone(),
            street: p.street.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Le nom est requis");
        for (field, value) in [
            ("min_deposit", self.min_deposit),
            ("max_deposit", self.max_deposit),
            ("min_withdrawal", self.min_withdrawal),
            ("max_withdrawal", self.max_withdrawal),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.add(field, "Le montant doit être positif");
            }
        }
        if self.min_deposit > self.max_deposit {
            errors.add("max_deposit", "Le dépôt maximum doit dépasser le minimum");
        }
        if self.min_withdrawal > self.max_withdrawal {
            errors.add("max_withdrawal", "Le retrait maximum doit dépasser le minimum");
        }
        errors.into_result()
    }

    /// Applies the saved form onto the displayed record.
    pub fn apply_to(&self, platform: &mut Platform) {
        platform.name = self.name.clone();
        platform.image = self.image.clone();
        platform.is_active = self.is_active;
        platform.min_deposit = self.min_deposit;
        platform.max_deposit = self.max_deposit;
        platform.min_withdrawal = self.min_withdrawal;
        platform.max_withdrawal = self.max_withdrawal;
        platform.city = self.city.clone();
        platform.street = self.street.clone();
    }
}

/// `GET platforms/{id}/stats/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub successful_transactions: u64,
    #[serde(default)]
    pub failed_transactions: u64,
    #[serde(default, deserialize_with = "de_amount_opt")]
    pub total_deposits: Option<f64>,
    #[serde(default, deserialize_with = "de_amount_opt")]
    pub total_withdrawals: Option<f64>,
    #[serde(default)]
    pub active_users: u64,
}

impl PlatformStats {
    /// Share of successful transactions in percent, `None` without traffic.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_transactions == 0 {
            None
        } else {
            Some(self.successful_transactions as f64 * 100.0 / self.total_transactions as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PlatformDto {
        PlatformDto {
            name: "1xBet".into(),
            is_active: true,
            min_deposit: 200.0,
            max_deposit: 500_000.0,
            min_withdrawal: 500.0,
            max_withdrawal: 300_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_dto() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_inverted_limits() {
        let mut d = dto();
        d.min_deposit = 1000.0;
        d.max_deposit = 10.0;
        let errors = d.validate().unwrap_err();
        assert!(errors.get("max_deposit").is_some());
        assert!(errors.get("max_withdrawal").is_none());
    }

    #[test]
    fn test_negative_and_missing_name() {
        let mut d = dto();
        d.name = " ".into();
        d.min_withdrawal = -1.0;
        let errors = d.validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("min_withdrawal").is_some());
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(PlatformStats::default().success_rate(), None);
        let stats = PlatformStats {
            total_transactions: 8,
            successful_transactions: 6,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), Some(75.0));
    }
}
