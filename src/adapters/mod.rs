//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories for tests and single-process use

pub mod memory;

pub use memory::{
    InMemoryCourseRepository, InMemoryInstructorRepository, InMemoryRegistrationRepository,
    InMemorySkierRepository, InMemorySubscriptionRepository,
};
