use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;
use crate::shared::validation::FieldErrors;
use crate::shared::Identified;

/// Commission rates applied to a platform's transactions, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionConfig {
    pub id: i64,
    pub platform: i64,
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub deposit_rate: f64,
    #[serde(deserialize_with = "de_amount")]
    pub withdrawal_rate: f64,
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Identified for CommissionConfig {
    fn record_id(&self) -> i64 {
        self.id
    }
}

/// `PATCH commission-configs/{id}/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCommissionConfigDto {
    pub deposit_rate: f64,
    pub withdrawal_rate: f64,
    pub is_active: bool,
}

impl UpdateCommissionConfigDto {
    pub fn from_config(c: &CommissionConfig) -> Self {
        Self {
            deposit_rate: c.deposit_rate,
            withdrawal_rate: c.withdrawal_rate,
            is_active: c.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (field, rate) in [
            ("deposit_rate", self.deposit_rate),
            ("withdrawal_rate", self.withdrawal_rate),
        ] {
            if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
                errors.add(field, "Le taux doit être compris entre 0 et 100");
            }
        }
        errors.into_result()
    }

    pub fn apply_to(&self, c: &mut CommissionConfig) {
        c.deposit_rate = self.deposit_rate;
        c.withdrawal_rate = self.withdrawal_rate;
        c.is_active = self.is_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_bounds() {
        let ok = UpdateCommissionConfigDto {
            deposit_rate: 0.0,
            withdrawal_rate: 100.0,
            is_active: true,
        };
        assert!(ok.validate().is_ok());

        let bad = UpdateCommissionConfigDto {
            deposit_rate: -0.5,
            withdrawal_rate: f64::NAN,
            is_active: true,
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
