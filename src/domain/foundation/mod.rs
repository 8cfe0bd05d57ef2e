//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier value objects and error types that form the
//! vocabulary of the ski station domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::{CourseId, InstructorId, PisteId, RegistrationId, SkierId, SubscriptionId};
