//! Domain model for the choir context.

pub mod animal;
pub mod choir;
pub mod factory;
pub mod loudness;
