//! AssignRegistrationToCourseHandler - attach an existing registration to
//! a course.
//!
//! Second half of incremental registration construction. Unlike the
//! historical behavior this path re-checks the duplicate and capacity
//! invariants under the bucket lock before attaching, so incremental
//! construction cannot reintroduce double-booking or overcapacity.
//! Eligibility is not re-evaluated here.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, RegistrationId};
use crate::domain::registration::{CapacityGuard, Registration, ReservationResult};
use crate::ports::{CourseRepository, RegistrationRepository};

/// Command to attach a registration to a course.
#[derive(Debug, Clone)]
pub struct AssignRegistrationToCourseCommand {
    pub registration_id: RegistrationId,
    pub course_id: CourseId,
}

/// Handler attaching registrations to courses with invariant re-checks.
pub struct AssignRegistrationToCourseHandler {
    courses: Arc<dyn CourseRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    capacity: Arc<CapacityGuard>,
}

impl AssignRegistrationToCourseHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        capacity: Arc<CapacityGuard>,
    ) -> Self {
        Self {
            courses,
            registrations,
            capacity,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignRegistrationToCourseCommand,
    ) -> Result<Registration, DomainError> {
        let Some(mut registration) = self
            .registrations
            .find_by_id(&cmd.registration_id)
            .await?
        else {
            return Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                format!("Registration {} not found", cmd.registration_id),
            ));
        };
        let Some(course) = self.courses.find_by_id(&cmd.course_id).await? else {
            return Err(DomainError::new(
                ErrorCode::CourseNotFound,
                format!("Course {} not found", cmd.course_id),
            ));
        };

        let _bucket = self
            .capacity
            .lock_bucket(cmd.course_id, registration.week)
            .await;

        // A skier-attached draft becoming complete must not duplicate an
        // existing (skier, course, week) triple.
        if let Some(skier_id) = registration.skier_id {
            let existing = self
                .registrations
                .count_for_skier_course_week(&skier_id, &cmd.course_id, registration.week)
                .await?;
            if existing > 0 {
                return Err(DomainError::new(
                    ErrorCode::AlreadyRegistered,
                    format!(
                        "Skier {} already registered to course {} for week {}",
                        skier_id, cmd.course_id, registration.week
                    ),
                ));
            }
        }

        if course.is_capacity_limited() {
            match self
                .capacity
                .try_reserve(cmd.course_id, registration.week)
                .await?
            {
                ReservationResult::Reserved => {}
                ReservationResult::Full => {
                    return Err(DomainError::new(
                        ErrorCode::CourseFull,
                        format!(
                            "Course {} full for week {}",
                            cmd.course_id, registration.week
                        ),
                    ));
                }
            }
        }

        registration.attach_course(cmd.course_id);
        self.registrations.save(&registration).await?;

        tracing::debug!(
            registration = %registration.id,
            course = %cmd.course_id,
            week = registration.week,
            "registration assigned to course"
        );
        Ok(registration)
    }
}
