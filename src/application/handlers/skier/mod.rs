//! Skier command handlers.

pub mod create_skier;

pub use create_skier::{CreateSkierCommand, CreateSkierHandler, SubscriptionTerms};
