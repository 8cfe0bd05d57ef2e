//! Registration domain module.
//!
//! A registration is the join record of one skier, one course and one week.
//! The admission decision that creates it lives in the application layer;
//! this module holds the record itself, the outcome vocabulary of that
//! decision, and the capacity guard.
//!
//! # Module Structure
//!
//! - `capacity` - CapacityGuard serializing per-(course, week) admission

mod capacity;

pub use capacity::{CapacityGuard, ReservationResult};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, RegistrationId, SkierId};

/// Registration entity - one skier, one course, one week.
///
/// Both references present means the registration is *complete*. Partial
/// registrations exist only through the incremental assign operations; the
/// admission path persists complete records exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    /// Season-relative week index. No fixed range is enforced here.
    pub week: u32,
    pub skier_id: Option<SkierId>,
    pub course_id: Option<CourseId>,
}

impl Registration {
    /// A registration with both references attached.
    pub fn complete(id: RegistrationId, week: u32, skier_id: SkierId, course_id: CourseId) -> Self {
        Self {
            id,
            week,
            skier_id: Some(skier_id),
            course_id: Some(course_id),
        }
    }

    /// A registration carrying only a week, awaiting assignment.
    pub fn draft(id: RegistrationId, week: u32) -> Self {
        Self {
            id,
            week,
            skier_id: None,
            course_id: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skier_id.is_some() && self.course_id.is_some()
    }

    pub fn attach_skier(&mut self, skier_id: SkierId) {
        self.skier_id = Some(skier_id);
    }

    pub fn attach_course(&mut self, course_id: CourseId) {
        self.course_id = Some(course_id);
    }
}

/// Which lookup failed during admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntity {
    Skier(SkierId),
    Course(CourseId),
}

/// Why an admissible-looking candidate was turned away.
///
/// These are expected outcomes of a correct decision, not failures; each
/// reason stays distinguishable for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The same (skier, course, week) triple is already registered.
    AlreadyRegistered,
    /// The skier's age does not match the course category.
    AgeIneligible,
    /// The (course, week) bucket is at the capacity ceiling.
    CourseFull,
}

/// Terminal states of one admission request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Admitted(Registration),
    Rejected(RejectionReason),
    NotFound(MissingEntity),
}

impl AdmissionOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionOutcome::Admitted(_))
    }
}
