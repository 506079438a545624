//! Persistence of the admin session.
//!
//! Local storage is the only persistence backend and is only reached through
//! [`SessionStore`]. The access token is mirrored into a cookie so that route
//! guards outside the app can see it.

use contracts::system::auth::AdminUser;
use wasm_bindgen::JsCast;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_KEY: &str = "user";
const ACCESS_COOKIE: &str = "access_token";

/// Key/value persistence used by the session store.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Mirrors the access token into a cookie; `None` expires it.
    fn mirror_access_cookie(&self, _token: Option<&str>) {}
}

/// Browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not persist '{}' to local storage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn mirror_access_cookie(&self, token: Option<&str>) {
        let Some(document) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        else {
            return;
        };
        let cookie = match token {
            Some(token) => format!("{}={}; path=/; SameSite=Lax", ACCESS_COOKIE, token),
            None => format!("{}=; path=/; max-age=0; SameSite=Lax", ACCESS_COOKIE),
        };
        let _ = document.set_cookie(&cookie);
    }
}

/// In-memory backend for native tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    cookie: std::cell::RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn cookie(&self) -> Option<String> {
        self.cookie.borrow().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn mirror_access_cookie(&self, token: Option<&str>) {
        *self.cookie.borrow_mut() = token.map(str::to_string);
    }
}

/// Typed access to the persisted tokens and cached user.
#[derive(Debug, Default, Clone)]
pub struct SessionStore<B: StorageBackend = LocalStorage> {
    backend: B,
}

impl SessionStore<LocalStorage> {
    pub fn browser() -> Self {
        Self {
            backend: LocalStorage,
        }
    }
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn save_login(&self, access: &str, refresh: &str, user: &AdminUser) {
        self.set_tokens(access, Some(refresh));
        self.save_user(user);
    }

    /// Stores a new access token; the refresh token is replaced only when the
    /// server rotated it.
    pub fn set_tokens(&self, access: &str, refresh: Option<&str>) {
        self.backend.set(ACCESS_TOKEN_KEY, access);
        self.backend.mirror_access_cookie(Some(access));
        if let Some(refresh) = refresh {
            self.backend.set(REFRESH_TOKEN_KEY, refresh);
        }
    }

    pub fn save_user(&self, user: &AdminUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(e) => log::error!("Could not serialize cached user: {}", e),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Cached user; a corrupt entry is treated as absent.
    pub fn cached_user(&self) -> Option<AdminUser> {
        let raw = self.backend.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Session that can be restored without a network round trip.
    pub fn restore(&self) -> Option<(String, AdminUser)> {
        Some((self.access_token()?, self.cached_user()?))
    }

    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.mirror_access_cookie(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        AdminUser {
            id: 1,
            email: "admin@mobcash.io".into(),
            first_name: "Awa".into(),
            last_name: "Diallo".into(),
            phone: None,
            is_superuser: true,
            is_staff: true,
        }
    }

    #[test]
    fn test_login_then_restore() {
        let store = SessionStore::with_backend(MemoryStorage::default());
        assert!(store.restore().is_none());

        store.save_login("acc-1", "ref-1", &admin());
        let (token, user) = store.restore().unwrap();
        assert_eq!(token, "acc-1");
        assert_eq!(user, admin());
        assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
        assert_eq!(store.backend().cookie().as_deref(), Some("acc-1"));
    }

    #[test]
    fn test_refresh_without_rotation_keeps_refresh_token() {
        let store = SessionStore::with_backend(MemoryStorage::default());
        store.save_login("acc-1", "ref-1", &admin());
        store.set_tokens("acc-2", None);
        assert_eq!(store.access_token().as_deref(), Some("acc-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));

        store.set_tokens("acc-3", Some("ref-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref-2"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = SessionStore::with_backend(MemoryStorage::default());
        store.save_login("acc-1", "ref-1", &admin());
        store.clear();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.cached_user().is_none());
        assert!(store.backend().cookie().is_none());
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let backend = MemoryStorage::default();
        backend.set(USER_KEY, "{not json");
        backend.set(ACCESS_TOKEN_KEY, "acc");
        let store = SessionStore::with_backend(backend);
        assert!(store.cached_user().is_none());
        assert!(store.restore().is_none());
    }
}
