//! Registration repository port.
//!
//! Besides load/save this port carries the two count queries the admission
//! decision is built on: the (skier, course, week) count backing the
//! idempotency rule and the (course, week) count backing the capacity
//! ceiling. Counts only consider rows whose course reference is attached;
//! drafts awaiting assignment occupy no slot.

use async_trait::async_trait;

use crate::domain::foundation::{CourseId, DomainError, RegistrationId, SkierId};
use crate::domain::registration::Registration;

/// Repository port for Registration persistence.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert or replace a registration by id.
    async fn save(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Find a registration by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// Number of registrations for the exact (skier, course, week) triple.
    ///
    /// The idempotency invariant means this is 0 or 1 in a consistent
    /// store.
    async fn count_for_skier_course_week(
        &self,
        skier_id: &SkierId,
        course_id: &CourseId,
        week: u32,
    ) -> Result<u32, DomainError>;

    /// Number of registrations in the (course, week) bucket.
    async fn count_for_course_week(
        &self,
        course_id: &CourseId,
        week: u32,
    ) -> Result<u32, DomainError>;

    /// Week numbers of every registration attached to the course.
    ///
    /// May contain duplicates; callers aggregate.
    async fn weeks_for_course(&self, course_id: &CourseId) -> Result<Vec<u32>, DomainError>;
}
