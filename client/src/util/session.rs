//! Session token persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior; SSR paths no-op and report
//! no token so server rendering always takes the signed-out branch.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "recruitmatch_token";

/// Read the stored bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a bearer token for later requests.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
