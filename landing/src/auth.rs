//! Auth context.
//!
//! The identity is read once at startup from the session blob the portal
//! keeps in `localStorage` and shared read-only through Leptos context.
//! This page never writes it.

use leptos::prelude::*;
use practice_core::auth::AuthIdentity;

/// `localStorage` key holding the portal's session JSON.
pub const SESSION_KEY: &str = "practice.session";

#[derive(Clone, Copy)]
struct AuthContext {
    identity: ReadSignal<AuthIdentity>,
}

/// Make `identity` available to every component below the caller.
pub fn provide_auth(identity: AuthIdentity) {
    let (identity, _) = signal(identity);
    provide_context(AuthContext { identity });
}

/// Current identity; anonymous when no provider is mounted.
pub fn use_auth() -> Signal<AuthIdentity> {
    match use_context::<AuthContext>() {
        Some(ctx) => ctx.identity.into(),
        None => Signal::stored(AuthIdentity::anonymous()),
    }
}

/// Read the stored session. Missing or malformed sessions are anonymous.
pub fn load_session_identity() -> AuthIdentity {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::debug!("[auth] localStorage unavailable");
        return AuthIdentity::anonymous();
    };

    match storage.get_item(SESSION_KEY) {
        Ok(Some(json)) => AuthIdentity::from_session_json(&json).unwrap_or_else(|e| {
            log::warn!("[auth] ignoring malformed session: {e}");
            AuthIdentity::anonymous()
        }),
        Ok(None) => AuthIdentity::anonymous(),
        Err(_) => {
            log::debug!("[auth] session read blocked");
            AuthIdentity::anonymous()
        }
    }
}
