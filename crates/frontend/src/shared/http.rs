//! Authorized request execution.
//!
//! Every call to the API goes through [`send_json`] or [`send_empty`]. A `401`
//! on an authorized request triggers one transparent token refresh and one
//! retry; when that is impossible the session is cleared and the browser is
//! sent to the login page.

use contracts::system::auth::{RefreshRequest, RefreshResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_url, with_query};
use crate::shared::error::AppError;
use crate::system::auth::storage::SessionStore;

pub const REFRESH_PATH: &str = "auth/refresh/";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    params: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    authorized: bool,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            body: None,
            authorized: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        let value = serde_json::to_value(body).map_err(|e| AppError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Sent without the bearer token and never refreshed (login, sign-up).
    pub fn anonymous(mut self) -> Self {
        self.authorized = false;
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self) -> String {
        with_query(&api_url(&self.path), &self.params)
    }
}

/// What to do after an authorized request came back `401`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Another request already refreshed the token; retry with it.
    RetryWithCurrent(String),
    /// Refresh with the stored refresh token, then retry.
    Refresh(String),
    /// Nothing left to try: the session is over.
    GiveUp,
}

pub fn retry_decision(sent: Option<&str>, current: Option<&str>, refresh: Option<&str>) -> RetryDecision {
    match (current, refresh) {
        (Some(current), _) if Some(current) != sent => RetryDecision::RetryWithCurrent(current.to_string()),
        (_, Some(refresh)) => RetryDecision::Refresh(refresh.to_string()),
        _ => RetryDecision::GiveUp,
    }
}

pub async fn send_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, AppError> {
    let response = execute(&request).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("Unexpected body from {}: {}", request.path, e);
        AppError::Decode(e.to_string())
    })
}

/// For endpoints whose body is irrelevant (`204`, acknowledgements).
pub async fn send_empty(request: ApiRequest) -> Result<(), AppError> {
    execute(&request).await.map(|_| ())
}

async fn execute(request: &ApiRequest) -> Result<Response, AppError> {
    if !request.authorized {
        return checked(dispatch(request, None).await?).await;
    }

    let store = SessionStore::browser();
    let Some(sent) = store.access_token() else {
        expire_session();
        return Err(AppError::NotAuthenticated);
    };

    let response = dispatch(request, Some(&sent)).await?;
    if response.status() != 401 {
        return checked(response).await;
    }

    log::debug!("401 on {}, attempting token recovery", request.path);
    let token = match retry_decision(Some(sent.as_str()), store.access_token().as_deref(), store.refresh_token().as_deref()) {
        RetryDecision::RetryWithCurrent(token) => token,
        RetryDecision::Refresh(refresh) => match refresh_access(&store, &refresh).await {
            Ok(token) => token,
            Err(e) => {
                // A concurrent request may have rotated the refresh token first.
                match store.access_token().filter(|current| *current != sent) {
                    Some(current) => current,
                    None => {
                        log::warn!("Token refresh failed: {}", e);
                        expire_session();
                        return Err(AppError::SessionExpired);
                    }
                }
            }
        },
        RetryDecision::GiveUp => {
            expire_session();
            return Err(AppError::SessionExpired);
        }
    };

    let retried = dispatch(request, Some(&token)).await?;
    if retried.status() == 401 {
        log::warn!("Request to {} still unauthorized after refresh", request.path);
        expire_session();
        return Err(AppError::SessionExpired);
    }
    checked(retried).await
}

async fn refresh_access(store: &SessionStore, refresh: &str) -> Result<String, AppError> {
    let request = ApiRequest::post(REFRESH_PATH)
        .anonymous()
        .json(&RefreshRequest {
            refresh: refresh.to_string(),
        })?;
    let response = checked(dispatch(&request, None).await?).await?;
    let text = response.text().await?;
    let tokens: RefreshResponse =
        serde_json::from_str(&text).map_err(|e| AppError::Decode(e.to_string()))?;
    store.set_tokens(&tokens.access, tokens.refresh.as_deref());
    log::info!("Access token refreshed");
    Ok(tokens.access)
}

async fn dispatch(request: &ApiRequest, token: Option<&str>) -> Result<Response, AppError> {
    let url = request.url();
    log::debug!("{:?} {}", request.method, url);

    let mut builder: RequestBuilder = match request.method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Patch => Request::patch(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    builder = builder.header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let built = match &request.body {
        Some(body) => builder.json(body)?,
        None => builder.build()?,
    };
    Ok(built.send().await?)
}

/// Turns non-success statuses into `AppError`.
async fn checked(response: Response) -> Result<Response, AppError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::from_response(status, &body))
}

/// Clears the persisted session and leaves for the login page.
pub fn expire_session() {
    SessionStore::browser().clear();
    log::warn!("Session expired, redirecting to {}", LOGIN_ROUTE);
    if let Some(window) = web_sys::window() {
        let already_there = window
            .location()
            .pathname()
            .map(|p| p == LOGIN_ROUTE)
            .unwrap_or(false);
        if !already_there {
            let _ = window.location().set_href(LOGIN_ROUTE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_with_token_refreshed_elsewhere() {
        assert_eq!(
            retry_decision(Some("old"), Some("new"), Some("r")),
            RetryDecision::RetryWithCurrent("new".into())
        );
    }

    #[test]
    fn test_refresh_when_token_unchanged() {
        assert_eq!(
            retry_decision(Some("old"), Some("old"), Some("r")),
            RetryDecision::Refresh("r".into())
        );
        assert_eq!(
            retry_decision(Some("old"), None, Some("r")),
            RetryDecision::Refresh("r".into())
        );
    }

    #[test]
    fn test_give_up_without_refresh_token() {
        assert_eq!(retry_decision(Some("old"), Some("old"), None), RetryDecision::GiveUp);
        assert_eq!(retry_decision(None, None, None), RetryDecision::GiveUp);
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::patch("permissions/4/")
            .json(&serde_json::json!({ "can_deposit": true }))
            .unwrap();
        assert_eq!(request.method(), HttpMethod::Patch);
        assert_eq!(request.path(), "permissions/4/");
        assert!(request.authorized);
        assert!(!ApiRequest::post("auth/login/").anonymous().authorized);
    }
}
