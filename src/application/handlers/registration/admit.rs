//! AdmitRegistrationHandler - the admission decision for one candidate
//! enrollment.
//!
//! This is the only component with side effects and concurrency exposure:
//! it loads the skier and course, applies the idempotency rule, the
//! category eligibility policy and the capacity ceiling, and persists the
//! registration on the accept path. Every negative outcome is terminal and
//! leaves no trace in the store.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::{CourseId, DomainError, RegistrationId, SkierId};
use crate::domain::registration::{
    AdmissionOutcome, CapacityGuard, MissingEntity, Registration, RejectionReason,
    ReservationResult,
};
use crate::ports::{CourseRepository, RegistrationRepository, SkierRepository};

/// Command to admit one (skier, course, week) candidate.
#[derive(Debug, Clone)]
pub struct AdmitRegistrationCommand {
    pub skier_id: SkierId,
    pub course_id: CourseId,
    pub week: u32,
}

/// Handler deciding whether a candidate enrollment is admissible.
pub struct AdmitRegistrationHandler {
    skiers: Arc<dyn SkierRepository>,
    courses: Arc<dyn CourseRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    capacity: Arc<CapacityGuard>,
}

impl AdmitRegistrationHandler {
    pub fn new(
        skiers: Arc<dyn SkierRepository>,
        courses: Arc<dyn CourseRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        capacity: Arc<CapacityGuard>,
    ) -> Self {
        Self {
            skiers,
            courses,
            registrations,
            capacity,
        }
    }

    /// Run the admission decision.
    ///
    /// Business rejections and missing lookups are outcomes; `Err` is
    /// reserved for store failures, which propagate without retries.
    pub async fn handle(
        &self,
        cmd: AdmitRegistrationCommand,
    ) -> Result<AdmissionOutcome, DomainError> {
        // 1-2. Resolve both sides of the candidate.
        let Some(skier) = self.skiers.find_by_id(&cmd.skier_id).await? else {
            return Ok(AdmissionOutcome::NotFound(MissingEntity::Skier(
                cmd.skier_id,
            )));
        };
        let Some(course) = self.courses.find_by_id(&cmd.course_id).await? else {
            return Ok(AdmissionOutcome::NotFound(MissingEntity::Course(
                cmd.course_id,
            )));
        };

        // The bucket lock spans both check-then-act sequences and the
        // persist. Same-triple requests contend here too, since the
        // idempotency key is a refinement of the bucket key.
        let _bucket = self.capacity.lock_bucket(cmd.course_id, cmd.week).await;

        // 3. Idempotency: the triple must not already be registered.
        let existing = self
            .registrations
            .count_for_skier_course_week(&cmd.skier_id, &cmd.course_id, cmd.week)
            .await?;
        if existing > 0 {
            tracing::info!(
                skier = %cmd.skier_id,
                course = %cmd.course_id,
                week = cmd.week,
                "already registered for this course and week"
            );
            return Ok(AdmissionOutcome::Rejected(RejectionReason::AlreadyRegistered));
        }

        // 4. Age at decision time.
        let age = skier.age_on(Utc::now().date_naive());

        // 5-6. Individual lessons skip eligibility and capacity entirely.
        if course.is_capacity_limited() {
            if !course.category.admits(age) {
                tracing::info!(
                    skier = %cmd.skier_id,
                    category = %course.category,
                    age,
                    "age does not allow registration for this course"
                );
                return Ok(AdmissionOutcome::Rejected(RejectionReason::AgeIneligible));
            }

            match self.capacity.try_reserve(cmd.course_id, cmd.week).await? {
                ReservationResult::Reserved => {}
                ReservationResult::Full => {
                    tracing::info!(
                        course = %cmd.course_id,
                        week = cmd.week,
                        ceiling = self.capacity.ceiling(),
                        "course full for this week"
                    );
                    return Ok(AdmissionOutcome::Rejected(RejectionReason::CourseFull));
                }
            }
        }

        // 7. Persist the complete registration. A failure here propagates
        // while the bucket lock is still held; the count never moved, so
        // no slot leaks.
        let registration = Registration::complete(
            RegistrationId::new(),
            cmd.week,
            cmd.skier_id,
            cmd.course_id,
        );
        self.registrations.save(&registration).await?;

        tracing::info!(
            registration = %registration.id,
            skier = %cmd.skier_id,
            course = %cmd.course_id,
            week = cmd.week,
            "registration admitted"
        );
        Ok(AdmissionOutcome::Admitted(registration))
    }
}
