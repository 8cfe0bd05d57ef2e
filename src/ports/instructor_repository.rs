//! Instructor repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InstructorId};
use crate::domain::instructor::Instructor;

/// Repository port for Instructor persistence.
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// Insert or replace an instructor by id.
    async fn save(&self, instructor: &Instructor) -> Result<(), DomainError>;

    /// Find an instructor by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &InstructorId) -> Result<Option<Instructor>, DomainError>;
}
