//! Application layer - commands, queries, and their handlers.
//!
//! Handlers orchestrate domain logic over repository ports. They own no
//! business rules themselves beyond sequencing: load, check, mutate,
//! persist.

pub mod handlers;

pub use handlers::registration::{
    AdmitRegistrationCommand, AdmitRegistrationHandler, AssignRegistrationToCourseCommand,
    AssignRegistrationToCourseHandler, AssignRegistrationToSkierCommand,
    AssignRegistrationToSkierHandler, InstructorWeeksHandler, InstructorWeeksQuery,
};
pub use handlers::skier::{CreateSkierCommand, CreateSkierHandler, SubscriptionTerms};
pub use handlers::subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
