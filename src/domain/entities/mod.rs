//! Core business entities.

pub mod entry;

pub use entry::{ClickEvent, Entry, RETENTION_HOURS};
