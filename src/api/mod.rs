//! API layer: DTOs and Axum handlers over the registry surface.

pub mod dto;
pub mod handlers;
