//! Course repository port.

use async_trait::async_trait;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError};

/// Repository port for Course persistence.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert or replace a course by id.
    async fn save(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;
}
