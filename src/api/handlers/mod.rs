//! HTTP handlers for the caller-facing operation surface.

pub mod entries;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use entries::entries_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
