use serde::{Deserialize, Serialize};

use crate::shared::validation::FieldErrors;
use crate::shared::Identified;

/// Grants a user the right to deposit and/or withdraw on a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub user: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    pub platform: i64,
    #[serde(default)]
    pub platform_name: Option<String>,
    pub can_deposit: bool,
    pub can_withdraw: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for Permission {
    fn record_id(&self) -> i64 {
        self.id
    }
}

/// `PATCH permissions/{id}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePermissionDto {
    pub can_deposit: bool,
    pub can_withdraw: bool,
}

impl UpdatePermissionDto {
    pub fn from_permission(p: &Permission) -> Self {
        Self {
            can_deposit: p.can_deposit,
            can_withdraw: p.can_withdraw,
        }
    }

    pub fn apply_to(&self, p: &mut Permission) {
        p.can_deposit = self.can_deposit;
        p.can_withdraw = self.can_withdraw;
    }
}

/// `POST users/{id}/permissions/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPermissionDto {
    pub platform: i64,
    pub can_deposit: bool,
    pub can_withdraw: bool,
}

impl AddPermissionDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.platform <= 0 {
            errors.add("platform", "Sélectionnez une plateforme");
        }
        if !self.can_deposit && !self.can_withdraw {
            errors.add("can_deposit", "Accordez au moins un droit");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_permission_validation() {
        assert!(AddPermissionDto {
            platform: 1,
            can_deposit: true,
            can_withdraw: false
        }
        .validate()
        .is_ok());

        let errors = AddPermissionDto::default().validate().unwrap_err();
        assert!(errors.get("platform").is_some());
        assert!(errors.get("can_deposit").is_some());
    }

    #[test]
    fn test_update_roundtrip_onto_record() {
        let json = r#"{"id": 9, "user": 5, "platform": 2, "can_deposit": true, "can_withdraw": false}"#;
        let mut p: Permission = serde_json::from_str(json).unwrap();
        let mut dto = UpdatePermissionDto::from_permission(&p);
        dto.can_withdraw = true;
        dto.apply_to(&mut p);
        assert!(p.can_deposit && p.can_withdraw);
    }
}
