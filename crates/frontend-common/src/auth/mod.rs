//! Authentication module

pub mod context;

// Re-export commonly used items
pub use context::{Session, SessionStore};
