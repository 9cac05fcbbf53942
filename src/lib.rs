//! # tinylink
//!
//! A typed client controller for the TinyURL API: validate a user-supplied
//! URL, submit it for shortening, and expose loading/result/error state to a
//! presentation layer.
//!
//! ## Architecture
//!
//! The crate keeps a small layered layout:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::ShortenedLink`]
//!   entity and the [`domain::gateway::ShortenGateway`] trait
//! - **Application Layer** ([`application`]) - The
//!   [`application::ShorteningController`] state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - The reqwest-backed
//!   TinyURL gateway
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tinylink::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = Arc::new(TinyUrlGateway::new("tok_my_api_key"));
//!     let controller = ShorteningController::new(gateway);
//!
//!     let snapshot = controller.submit("https://example.com").await;
//!     if let Some(link) = snapshot.result {
//!         println!("{} -> {}", link.original_url, link.short_url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## State machine
//!
//! `Idle → Loading → {Success | Error} → Idle` on the next submit or reset,
//! with a direct `Idle → Error` edge when validation fails. Submitting a new
//! input supersedes any in-flight request; the superseded request's eventual
//! resolution is discarded.
//!
//! ## Configuration
//!
//! The credential is passed explicitly to the gateway. The example binary
//! loads it from `TINYURL_API_KEY` via [`config::Config`]; see the [`config`]
//! module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use application::{RequestState, ShorteningController, StateSnapshot};
pub use error::ShortenError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{RequestState, ShorteningController, StateSnapshot};
    pub use crate::config::Config;
    pub use crate::domain::entities::ShortenedLink;
    pub use crate::domain::gateway::ShortenGateway;
    pub use crate::error::ShortenError;
    pub use crate::infrastructure::TinyUrlGateway;
}
