//! Pet care HTTP gateway
//!
//! The shared network client of the pet care admin frontend together with
//! the wire types of the backend API. Every call goes through
//! [`client::PetCareClient`], which attaches the session token and turns
//! responses into `Result<Envelope<T>, ClientError>`.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::session::{CredentialStore, Notifier, SessionEvent, TracingNotifier};
pub use client::{PetCareClient, PetCareClientBuilder};
pub use types::{Envelope, Page};
