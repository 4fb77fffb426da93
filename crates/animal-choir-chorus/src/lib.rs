//! Animal Choir — singers, factory and choir bounded context.
//!
//! Responsible for building animals from type names, grouping them by
//! loudness, and rendering the two choir passes (crescendo and arpeggio).

pub mod application;
pub mod domain;
