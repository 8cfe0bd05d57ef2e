//! Registration command and query handlers.

pub mod admit;
pub mod assign_to_course;
pub mod assign_to_skier;
pub mod instructor_weeks;

pub use admit::{AdmitRegistrationCommand, AdmitRegistrationHandler};
pub use assign_to_course::{AssignRegistrationToCourseCommand, AssignRegistrationToCourseHandler};
pub use assign_to_skier::{AssignRegistrationToSkierCommand, AssignRegistrationToSkierHandler};
pub use instructor_weeks::{InstructorWeeksHandler, InstructorWeeksQuery};
