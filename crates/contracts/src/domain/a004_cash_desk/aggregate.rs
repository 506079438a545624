use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount_opt;
use crate::shared::validation::{min_chars, require, FieldErrors};
use crate::shared::Identified;

/// Operator account on a platform used to execute deposits and withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashDesk {
    pub id: i64,
    pub name: String,
    pub platform: i64,
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(default)]
    pub login: String,
    #[serde(default, deserialize_with = "de_amount_opt")]
    pub balance: Option<f64>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for CashDesk {
    fn record_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCashDeskDto {
    pub name: String,
    pub platform: i64,
    pub login: String,
    pub password: String,
}

impl CreateCashDeskDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Le nom est requis");
        if self.platform <= 0 {
            errors.add("platform", "Sélectionnez une plateforme");
        }
        validate_credentials(&mut errors, &self.login, &self.password);
        errors.into_result()
    }
}

/// `PATCH cashdesks/{id}/status/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCashDeskStatusDto {
    pub is_active: bool,
}

/// `PATCH cashdesks/{id}/credentials/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCashDeskCredentialsDto {
    pub login: String,
    pub password: String,
}

impl UpdateCashDeskCredentialsDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_credentials(&mut errors, &self.login, &self.password);
        errors.into_result()
    }
}

fn validate_credentials(errors: &mut FieldErrors, login: &str, password: &str) {
    min_chars(errors, "login", login, 3, "L'identifiant doit contenir au moins 3 caractères");
    min_chars(
        errors,
        "password",
        password,
        6,
        "Le mot de passe doit contenir au moins 6 caractères",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_validation() {
        let dto = CreateCashDeskDto {
            name: "Caisse Lomé".into(),
            platform: 2,
            login: "lome01".into(),
            password: "secret1".into(),
        };
        assert!(dto.validate().is_ok());

        let errors = CreateCashDeskDto::default().validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("platform").is_some());
        assert!(errors.get("login").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_credentials_validation() {
        let dto = UpdateCashDeskCredentialsDto {
            login: "ab".into(),
            password: "123456".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("login").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_decode_without_balance() {
        let json = r#"{"id": 1, "name": "C1", "platform": 2, "is_active": false}"#;
        let desk: CashDesk = serde_json::from_str(json).unwrap();
        assert_eq!(desk.balance, None);
        assert!(!desk.is_active);
    }
}
