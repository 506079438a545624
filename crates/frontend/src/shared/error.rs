//! Error taxonomy of the dashboard.
//!
//! Every fetch and mutation returns `AppError`; call sites turn it into a
//! notification through `Notifications::report`.

use contracts::shared::validation::FieldErrors;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("unauthorized")]
    Unauthorized,
    #[error("session expired")]
    SessionExpired,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// Client-side business rule that blocked a submission.
    #[error("{0}")]
    Rule(String),
}

impl AppError {
    /// French text shown to the operator.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Impossible de joindre le serveur. Vérifiez votre connexion.".to_string()
            }
            AppError::Http { status, detail } => match *status {
                403 => "Vous n'avez pas les droits pour cette action.".to_string(),
                404 => "Ressource introuvable.".to_string(),
                500..=599 => "Erreur serveur, veuillez réessayer plus tard.".to_string(),
                _ if !detail.trim().is_empty() => detail.clone(),
                _ => format!("Une erreur est survenue (HTTP {}).", status),
            },
            AppError::Unauthorized => "Accès refusé.".to_string(),
            AppError::SessionExpired => {
                "Votre session a expiré, veuillez vous reconnecter.".to_string()
            }
            AppError::NotAuthenticated => "Vous n'êtes pas connecté.".to_string(),
            AppError::Decode(_) => "Réponse inattendue du serveur.".to_string(),
            AppError::Validation(errors) => match errors.iter().next() {
                Some((_, message)) if errors.len() == 1 => message.to_string(),
                _ => "Veuillez corriger les champs en erreur.".to_string(),
            },
            AppError::Rule(message) => message.clone(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Builds the error for a non-success response from its status and the
    /// raw body (DRF style: `{"detail": ...}` or `{"field": ["msg"]}`).
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return AppError::Unauthorized;
        }
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let Some(Value::Object(map)) = parsed else {
            return AppError::Http {
                status,
                detail: String::new(),
            };
        };

        if let Some(detail) = map.get("detail").and_then(first_message) {
            return AppError::Http { status, detail };
        }
        if let Some(detail) = map.get("non_field_errors").and_then(first_message) {
            return AppError::Http { status, detail };
        }
        if status == 400 {
            let mut errors = FieldErrors::new();
            for (field, value) in &map {
                if let Some(message) = first_message(value) {
                    errors.add(field, message);
                }
            }
            if !errors.is_empty() {
                return AppError::Validation(errors);
            }
        }
        AppError::Http {
            status,
            detail: String::new(),
        }
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_body() {
        let err = AppError::from_response(409, r#"{"detail": "Demande déjà traitée"}"#);
        assert_eq!(
            err,
            AppError::Http {
                status: 409,
                detail: "Demande déjà traitée".into()
            }
        );
        assert_eq!(err.user_message(), "Demande déjà traitée");
    }

    #[test]
    fn test_field_errors_body() {
        let err = AppError::from_response(
            400,
            r#"{"name": ["Ce champ est obligatoire."], "min_deposit": "Invalide"}"#,
        );
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("name"), Some("Ce champ est obligatoire."));
        assert_eq!(fields.get("min_deposit"), Some("Invalide"));
    }

    #[test]
    fn test_non_field_errors() {
        let err = AppError::from_response(
            400,
            r#"{"non_field_errors": ["Identifiants invalides"]}"#,
        );
        assert_eq!(err.user_message(), "Identifiants invalides");
    }

    #[test]
    fn test_unauthorized_and_plain_bodies() {
        assert_eq!(AppError::from_response(401, "{}"), AppError::Unauthorized);
        let err = AppError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(
            err.user_message(),
            "Erreur serveur, veuillez réessayer plus tard."
        );
        let err = AppError::from_response(418, "");
        assert_eq!(err.user_message(), "Une erreur est survenue (HTTP 418).");
    }

    #[test]
    fn test_single_validation_message_is_shown() {
        let mut errors = FieldErrors::new();
        errors.add("notes", "Motif requis");
        assert_eq!(AppError::Validation(errors).user_message(), "Motif requis");
    }
}
