//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! Persistence is deliberately thin here: simple load/save keyed by
//! identifier plus the two count queries the admission decision needs.

mod course_repository;
mod instructor_repository;
mod registration_repository;
mod skier_repository;
mod subscription_repository;

pub use course_repository::CourseRepository;
pub use instructor_repository::InstructorRepository;
pub use registration_repository::RegistrationRepository;
pub use skier_repository::SkierRepository;
pub use subscription_repository::SubscriptionRepository;
