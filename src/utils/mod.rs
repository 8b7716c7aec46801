//! Shared helpers: code generation, target validation, click metadata.

pub mod click_meta;
pub mod code;
pub mod target;
