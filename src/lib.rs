//! # linkreg
//!
//! A short-code redirection registry built with Axum: alphanumeric codes
//! map to long target URLs, entries expire, every successful resolution is
//! recorded as a click event, and entries expired past a retention window
//! are purged on listing.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entry/click entities and the store and
//!   clock seams the registry depends on
//! - **Application Layer** ([`application`]) - The [`application::services::Registry`]
//!   service owning the entry collection
//! - **Infrastructure Layer** ([`infrastructure`]) - The JSON blob file store
//! - **API Layer** ([`api`]) - Axum handlers and DTOs
//!
//! ## Features
//!
//! - Generated 6-character codes, redrawn until unique; caller-requested
//!   codes with conflict detection
//! - Per-entry validity with expiry computed at read time
//! - Click capture (timestamp, source, location, agent) on every resolution
//! - 24-hour retention window for expired entries, cleaned up inline on
//!   listing
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional; see the config module for variables
//! export STORE_PATH="entries.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::Registry;
    pub use crate::domain::entities::{ClickEvent, Entry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
