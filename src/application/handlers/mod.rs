//! Command and query handlers, grouped by aggregate.

pub mod registration;
pub mod skier;
pub mod subscription;
