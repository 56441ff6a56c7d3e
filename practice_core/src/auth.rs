//! Read-only view of the authentication collaborator and the header it
//! produces.
//!
//! The page never signs anyone in or out; it only decides between the
//! greeting + dashboard action and the login + register pair.

use crate::devtools::{DevId, DevMeta};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Signed-in user, as exposed by the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Full display name, if the provider knows it
    #[serde(default)]
    pub name: Option<String>,
}

/// Identity snapshot read from the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// Whether a session is active
    #[serde(default)]
    pub is_authenticated: bool,
    /// The session's user, if any
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthIdentity {
    /// No session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Active session for a named user.
    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(User {
                name: Some(name.into()),
            }),
        }
    }

    /// Parse the session blob stored by the auth provider.
    pub fn from_session_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// First whitespace-delimited token of the user's name.
///
/// `None` when there is no user, no name, or the name is blank.
pub fn greeting_token(user: Option<&User>) -> Option<&str> {
    user?.name.as_deref()?.split_whitespace().next()
}

/// Header greeting text. Falls back to a nameless greeting.
pub fn greeting(user: Option<&User>) -> String {
    match greeting_token(user) {
        Some(first) => format!("Welcome, {first}!"),
        None => "Welcome!".to_string(),
    }
}

/// Destinations owned by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Signed-in area
    Dashboard,
    /// Sign-in form
    Login,
    /// Sign-up form
    Register,
}

impl Route {
    /// Router path.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }
}

/// Header button leading to a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavAction {
    /// Target route
    pub route: Route,
    /// Button text
    pub label: &'static str,
    /// Filled (primary) or ghost styling
    pub primary: bool,
    /// Overlay metadata
    pub dev: DevMeta,
}

impl NavAction {
    fn dashboard() -> Self {
        Self {
            route: Route::Dashboard,
            label: "Dashboard",
            primary: true,
            dev: DevMeta::named(
                DevId::new("nav-dashboard-button"),
                "Navigation Dashboard Button",
                "Dashboard button in navigation header for authenticated users",
            ),
        }
    }

    fn login() -> Self {
        Self {
            route: Route::Login,
            label: "Login",
            primary: false,
            dev: DevMeta::named(
                DevId::new("nav-login-button"),
                "Navigation Login Button",
                "Login button in navigation header",
            ),
        }
    }

    fn register() -> Self {
        Self {
            route: Route::Register,
            label: "Get Started",
            primary: true,
            dev: DevMeta::named(
                DevId::new("nav-register-button"),
                "Navigation Register Button",
                "Get started button in navigation header",
            ),
        }
    }
}

/// Right-hand side of the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderModel {
    /// Greeting, only for signed-in visitors
    pub greeting: Option<String>,
    /// Route buttons in display order
    pub actions: Vec<NavAction>,
    /// Overlay metadata of the wrapper
    pub dev: DevMeta,
}

impl HeaderModel {
    /// Header for the given identity.
    pub fn for_identity(identity: &AuthIdentity) -> Self {
        if identity.is_authenticated {
            Self {
                greeting: Some(greeting(identity.user.as_ref())),
                actions: vec![NavAction::dashboard()],
                dev: DevMeta::named(
                    DevId::new("user-section"),
                    "User Section",
                    "Authenticated user welcome area",
                ),
            }
        } else {
            Self {
                greeting: None,
                actions: vec![NavAction::login(), NavAction::register()],
                dev: DevMeta::named(
                    DevId::new("auth-buttons"),
                    "Authentication Buttons",
                    "Login and register buttons for unauthenticated users",
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn authenticated_header_greets_by_first_name() {
        let header = HeaderModel::for_identity(&AuthIdentity::signed_in("Jane Smith"));

        assert_eq!(header.greeting.as_deref(), Some("Welcome, Jane!"));
        assert_eq!(header.actions.len(), 1);
        assert_eq!(header.actions[0].route, Route::Dashboard);
        assert_eq!(header.dev.id.as_str(), "user-section");
    }

    #[test]
    fn anonymous_header_offers_login_and_register() {
        let header = HeaderModel::for_identity(&AuthIdentity::anonymous());

        assert_eq!(header.greeting, None);
        let routes: Vec<_> = header.actions.iter().map(|a| a.route).collect();
        assert_eq!(routes, vec![Route::Login, Route::Register]);
        assert_eq!(header.actions[1].label, "Get Started");
    }

    #[test]
    fn greeting_token_takes_first_word() {
        let user = User {
            name: Some("Jane Smith".into()),
        };
        assert_eq!(greeting_token(Some(&user)), Some("Jane"));

        let padded = User {
            name: Some("  Ana  Maria ".into()),
        };
        assert_eq!(greeting_token(Some(&padded)), Some("Ana"));
    }

    #[test]
    fn greeting_without_name_is_nameless() {
        let nameless = User { name: None };
        let blank = User {
            name: Some("   ".into()),
        };

        assert_eq!(greeting(None), "Welcome!");
        assert_eq!(greeting(Some(&nameless)), "Welcome!");
        assert_eq!(greeting(Some(&blank)), "Welcome!");
        assert!(!greeting(None).contains("undefined"));
    }

    #[test]
    fn authenticated_without_user_still_gets_dashboard() {
        let identity = AuthIdentity {
            is_authenticated: true,
            user: None,
        };
        let header = HeaderModel::for_identity(&identity);
        assert_eq!(header.greeting.as_deref(), Some("Welcome!"));
        assert_eq!(header.actions.len(), 1);
    }

    #[test]
    fn session_json_parsing() {
        let identity =
            AuthIdentity::from_session_json(r#"{"is_authenticated":true,"user":{"name":"Jane Smith"}}"#)
                .unwrap();
        assert_eq!(identity, AuthIdentity::signed_in("Jane Smith"));

        let sparse = AuthIdentity::from_session_json("{}").unwrap();
        assert_eq!(sparse, AuthIdentity::anonymous());

        assert!(AuthIdentity::from_session_json("not json").is_err());
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
    }
}
