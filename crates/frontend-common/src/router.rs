//! Route table and guarded navigation

use crate::auth_guard::{AuthGuard, GuardDecision};
use thiserror::Error;

/// Redirects followed before a navigation is abandoned
const MAX_REDIRECTS: usize = 8;

/// Static description of a navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub title: Option<&'static str>,
    /// Visiting this path always continues to another one
    pub redirect: Option<&'static str>,
}

impl RouteDescriptor {
    const fn protected(path: &'static str, name: &'static str, title: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
            title: Some(title),
            redirect: None,
        }
    }
}

/// Every page of the admin frontend
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/login",
        name: "Login",
        requires_auth: false,
        title: Some("Sign In"),
        redirect: None,
    },
    RouteDescriptor {
        path: "/",
        name: "Layout",
        requires_auth: true,
        title: None,
        redirect: Some("/dashboard"),
    },
    RouteDescriptor::protected("/dashboard", "Dashboard", "Dashboard"),
    RouteDescriptor::protected("/pets", "Pets", "Pet Management"),
    RouteDescriptor::protected("/users", "Users", "User Management"),
    RouteDescriptor::protected("/services", "Services", "Service Management"),
    RouteDescriptor::protected("/orders", "Orders", "Order Management"),
    RouteDescriptor::protected("/boardings", "Boardings", "Boarding Management"),
    RouteDescriptor::protected("/health-records", "HealthRecords", "Health Records"),
];

/// Navigation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Too many redirects while navigating to {0}")]
    RedirectLoop(String),
}

/// Find the route for `path`, ignoring any query string or trailing slash
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES.iter().find(|route| route.path == path)
}

/// Client-side router running every navigation through the auth guard
pub struct Router {
    guard: AuthGuard,
    current: Option<&'static RouteDescriptor>,
}

impl Router {
    pub const fn new(guard: AuthGuard) -> Self {
        Self {
            guard,
            current: None,
        }
    }

    /// Route the last navigation settled on
    pub const fn current(&self) -> Option<&'static RouteDescriptor> {
        self.current
    }

    /// Navigate to `path`, following static and guard redirects
    ///
    /// # Errors
    ///
    /// Returns an error for unknown paths or when redirects do not settle.
    pub fn push(&mut self, path: &str) -> Result<&'static RouteDescriptor, NavigationError> {
        let mut route = resolve(path).ok_or_else(|| NavigationError::NotFound(path.to_string()))?;

        for _ in 0..MAX_REDIRECTS {
            let next = match (route.redirect, self.guard.check(route)) {
                (Some(target), _) | (None, GuardDecision::Redirect(target)) => target,
                (None, GuardDecision::Proceed) => {
                    tracing::debug!(from = ?self.current.map(|r| r.path), to = route.path, "Navigated");
                    self.current = Some(route);
                    return Ok(route);
                }
            };
            tracing::debug!(from = route.path, to = next, "Navigation redirected");
            route = resolve(next).ok_or_else(|| NavigationError::NotFound(next.to_string()))?;
        }

        Err(NavigationError::RedirectLoop(path.to_string()))
    }
}
