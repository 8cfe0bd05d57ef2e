//! Capacity guard for per-(course, week) admission buckets.
//!
//! Admission is a check-then-act sequence: count what is persisted, then
//! write. Two concurrent requests for the same bucket must not both observe
//! "not yet full" and both write, so the guard hands out one async mutex
//! per bucket and the coordinator holds it from the first check through the
//! persist. The bucket's source of truth is the count of persisted
//! registrations; a failed persist under the lock therefore consumes no
//! slot and there is nothing to release.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::{CourseId, DomainError};
use crate::ports::RegistrationRepository;

/// Outcome of a reservation attempt against one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationResult {
    /// The pre-reservation count is below the ceiling; the caller may
    /// persist while still holding the bucket lock.
    Reserved,
    /// The bucket is at the ceiling. No state changed.
    Full,
}

type Bucket = (CourseId, u32);

/// Serializes admission per (course, week) and enforces the capacity
/// ceiling.
///
/// The ceiling is injected from configuration, not hard-coded.
pub struct CapacityGuard {
    ceiling: u32,
    registrations: Arc<dyn RegistrationRepository>,
    buckets: Mutex<HashMap<Bucket, Arc<Mutex<()>>>>,
}

impl CapacityGuard {
    pub fn new(ceiling: u32, registrations: Arc<dyn RegistrationRepository>) -> Self {
        Self {
            ceiling,
            registrations,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Acquire the admission lock for one (course, week) bucket.
    ///
    /// The guard must be held across every check that precedes a persist
    /// for this bucket, including the idempotency check: the idempotency
    /// key (skier, course, week) is strictly narrower, so two requests
    /// sharing it always contend on the same bucket.
    pub async fn lock_bucket(&self, course_id: CourseId, week: u32) -> OwnedMutexGuard<()> {
        let bucket = {
            let mut buckets = self.buckets.lock().await;
            Arc::clone(
                buckets
                    .entry((course_id, week))
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        bucket.lock_owned().await
    }

    /// Check the bucket against the ceiling.
    ///
    /// The caller must hold the bucket lock for the result to be
    /// meaningful; `Reserved` stays valid until the lock is released.
    pub async fn try_reserve(
        &self,
        course_id: CourseId,
        week: u32,
    ) -> Result<ReservationResult, DomainError> {
        let count = self
            .registrations
            .count_for_course_week(&course_id, week)
            .await?;

        if count < self.ceiling {
            Ok(ReservationResult::Reserved)
        } else {
            Ok(ReservationResult::Full)
        }
    }
}
