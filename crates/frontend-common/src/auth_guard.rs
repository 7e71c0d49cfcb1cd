//! Authentication guard for protected routes

use crate::auth::SessionStore;
use crate::config::AuthConfig;
use crate::router::RouteDescriptor;
use std::sync::Arc;

/// Outcome of checking a navigation against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Cancel the navigation and go to this path instead
    Redirect(&'static str),
}

/// Decide a navigation to `to` given whether a token is present
///
/// Only the presence of a token matters here. An expired token passes and
/// is caught by the gateway on the next API call.
pub fn decide(to: &RouteDescriptor, authenticated: bool) -> GuardDecision {
    if to.requires_auth && !authenticated {
        GuardDecision::Redirect(AuthConfig::LOGIN_PATH)
    } else if to.path == AuthConfig::LOGIN_PATH && authenticated {
        GuardDecision::Redirect(AuthConfig::HOME_PATH)
    } else {
        GuardDecision::Proceed
    }
}

/// Guard that consults the session store on every navigation
#[derive(Clone)]
pub struct AuthGuard {
    session: Arc<SessionStore>,
}

impl AuthGuard {
    pub const fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn check(&self, to: &RouteDescriptor) -> GuardDecision {
        decide(to, self.session.is_authenticated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::resolve;

    fn route(path: &str) -> &'static RouteDescriptor {
        resolve(path).unwrap()
    }

    #[test]
    fn test_protected_route_without_token_goes_to_login() {
        assert_eq!(
            decide(route("/pets"), false),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(
            decide(route("/health-records"), false),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_login_with_token_goes_home() {
        assert_eq!(decide(route("/login"), true), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_login_without_token_proceeds() {
        assert_eq!(decide(route("/login"), false), GuardDecision::Proceed);
    }

    #[test]
    fn test_protected_route_with_token_proceeds() {
        for path in ["/", "/dashboard", "/pets", "/users", "/orders"] {
            assert_eq!(decide(route(path), true), GuardDecision::Proceed, "{path}");
        }
    }
}
