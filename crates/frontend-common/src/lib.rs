//! Session, routing and application shell for the pet care admin client
//!
//! [`App`] owns the [`SessionStore`], the shared [`PetCareClient`] gateway
//! and the [`Router`]. The gateway reads the token from the store, and a
//! rejected token sends the router back to the login page.
//!
//! [`PetCareClient`]: petcare_http::PetCareClient

pub mod app;
pub mod auth;
pub mod auth_guard;
pub mod config;
pub mod error;
pub mod router;
pub mod storage;

pub use app::App;
pub use auth::{Session, SessionStore};
pub use auth_guard::{AuthGuard, GuardDecision};
pub use config::{AppConfig, AuthConfig};
pub use error::{AppError, Result};
pub use router::{NavigationError, RouteDescriptor, Router};
pub use storage::{FileStorage, MemoryStorage, Storage};
