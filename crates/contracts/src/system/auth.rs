use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_email, min_chars, require, FieldErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "email", &self.email, "L'email est requis");
        require(&mut errors, "password", &self.password, "Le mot de passe est requis");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: AdminUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// With refresh-token rotation enabled the server also returns a new refresh
/// token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
    pub re_password: String,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_email(&self.email) {
            errors.add("email", "Adresse email invalide");
        }
        require(&mut errors, "first_name", &self.first_name, "Le prénom est requis");
        require(&mut errors, "last_name", &self.last_name, "Le nom est requis");
        min_chars(
            &mut errors,
            "phone",
            &self.phone,
            8,
            "Numéro de téléphone invalide",
        );
        min_chars(
            &mut errors,
            "password",
            &self.password,
            8,
            "Le mot de passe doit contenir au moins 8 caractères",
        );
        if self.password != self.re_password {
            errors.add("re_password", "Les mots de passe ne correspondent pas");
        }
        errors.into_result()
    }
}

/// Authenticated operator, cached in local storage after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_staff: bool,
}

impl AdminUser {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

/// Body of `PATCH auth/me/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateProfileDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "first_name", &self.first_name, "Le prénom est requis");
        require(&mut errors, "last_name", &self.last_name, "Le nom est requis");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up() -> SignUpRequest {
        SignUpRequest {
            email: "agent@mobcash.io".into(),
            first_name: "Awa".into(),
            last_name: "Diallo".into(),
            phone: "+22890000000".into(),
            password: "s3cret-pass".into(),
            re_password: "s3cret-pass".into(),
        }
    }

    #[test]
    fn test_sign_up_valid() {
        assert!(sign_up().validate().is_ok());
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let mut req = sign_up();
        req.re_password = "other-pass".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.get("re_password").is_some());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_sign_up_short_password_and_bad_email() {
        let mut req = sign_up();
        req.email = "nope".into();
        req.password = "short".into();
        req.re_password = "short".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = LoginRequest::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_display_name_and_initials() {
        let user = AdminUser {
            id: 1,
            email: "ops@mobcash.io".into(),
            first_name: "kofi".into(),
            last_name: "Mensah".into(),
            phone: None,
            is_superuser: true,
            is_staff: true,
        };
        assert_eq!(user.display_name(), "kofi Mensah");
        assert_eq!(user.initials(), "KM");

        let anonymous = AdminUser {
            first_name: String::new(),
            last_name: String::new(),
            ..user
        };
        assert_eq!(anonymous.display_name(), "ops@mobcash.io");
        assert_eq!(anonymous.initials(), "O");
    }

    #[test]
    fn test_refresh_response_without_rotation() {
        let resp: RefreshResponse = serde_json::from_str(r#"{"access": "a"}"#).unwrap();
        assert_eq!(resp.refresh, None);
    }
}
