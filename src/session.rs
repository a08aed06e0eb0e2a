//! Session Token Storage
//!
//! The bearer token lives in a single persistent browser-storage slot.
//! Storage sits behind a trait so the API client never reaches for `window`
//! directly and tests can run without a browser.

use std::sync::Arc;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth.token";

/// Persistent slot for the session's bearer token.
///
/// No expiry, no refresh; a stored token is trusted until the backend
/// rejects it.
pub trait TokenStore: Send + Sync {
    /// Current token, if a session exists.
    fn get(&self) -> Option<String>;
    /// Store a token, replacing any previous one.
    fn set(&self, token: &str);
    /// Drop the stored token.
    fn clear(&self);
}

/// Shared handle to a token store.
pub type SharedTokens = Arc<dyn TokenStore>;

/// Token store backed by `window.localStorage`.
///
/// Looks the storage up per call instead of holding a JS handle; an
/// unavailable storage degrades to "no session" on reads.
pub struct BrowserTokens;

impl BrowserTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist the session token");
                }
            }
            None => log::warn!("localStorage unavailable; the session will not persist"),
        }
    }

    fn clear(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(TOKEN_KEY);
        }
    }
}

/// In-memory token store standing in for localStorage in tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokens(std::sync::Mutex<Option<String>>);

#[cfg(test)]
impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self(std::sync::Mutex::new(Some(token.to_string())))
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.0.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.lock().unwrap() = None;
    }
}
