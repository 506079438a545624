use serde::{Deserialize, Serialize};

use crate::shared::amount::de_amount;
use crate::shared::Identified;

/// End user of the MobCash mobile application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl Identified for AppUser {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl AppUser {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Account status change issued from the user panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatusAction {
    Activate,
    Deactivate,
}

impl UserStatusAction {
    pub fn for_user(user: &AppUser) -> Self {
        if user.is_active {
            UserStatusAction::Deactivate
        } else {
            UserStatusAction::Activate
        }
    }

    pub fn action_path(&self) -> &'static str {
        match self {
            UserStatusAction::Activate => "activate",
            UserStatusAction::Deactivate => "deactivate",
        }
    }

    pub fn resulting_active(&self) -> bool {
        matches!(self, UserStatusAction::Activate)
    }
}

/// `GET users/{id}/wallet/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(deserialize_with = "de_amount")]
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_currency() -> String {
    "FCFA".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_action() {
        let json = r#"{"id": 5, "email": "u@mail.tg", "is_active": true}"#;
        let mut user: AppUser = serde_json::from_str(json).unwrap();
        assert_eq!(UserStatusAction::for_user(&user), UserStatusAction::Deactivate);
        user.is_active = UserStatusAction::Deactivate.resulting_active();
        assert_eq!(UserStatusAction::for_user(&user), UserStatusAction::Activate);
        assert_eq!(user.display_name(), "u@mail.tg");
    }

    #[test]
    fn test_wallet_default_currency() {
        let wallet: Wallet = serde_json::from_str(r#"{"balance": "12000.00"}"#).unwrap();
        assert_eq!(wallet.balance, 12000.0);
        assert_eq!(wallet.currency, "FCFA");
    }
}
