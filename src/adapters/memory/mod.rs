//! In-memory repository implementations.
//!
//! `tokio::sync::RwLock<HashMap<…>>` backed stores. Suitable for tests and
//! single-process deployments; not for multi-node use.

mod course_store;
mod instructor_store;
mod registration_store;
mod skier_store;
mod subscription_store;

pub use course_store::InMemoryCourseRepository;
pub use instructor_store::InMemoryInstructorRepository;
pub use registration_store::InMemoryRegistrationRepository;
pub use skier_store::InMemorySkierRepository;
pub use subscription_store::InMemorySubscriptionRepository;
