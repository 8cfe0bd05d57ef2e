//! Subscription command handlers.

pub mod create_subscription;
pub mod update_subscription;

pub use create_subscription::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use update_subscription::{UpdateSubscriptionCommand, UpdateSubscriptionHandler};
