//! Application layer: driving a choir through a full performance.

pub mod performance;
