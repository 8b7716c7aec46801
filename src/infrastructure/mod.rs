//! Infrastructure layer: concrete collaborator implementations.

pub mod persistence;
