//! In-memory registration store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{CourseId, DomainError, RegistrationId, SkierId};
use crate::domain::registration::Registration;
use crate::ports::RegistrationRepository;

/// In-memory implementation of [`RegistrationRepository`].
///
/// Count queries only consider rows with the course reference attached, so
/// drafts never occupy a capacity slot.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepository {
    rows: RwLock<HashMap<RegistrationId, Registration>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored registrations, drafts included.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        self.rows
            .write()
            .await
            .insert(registration.id, registration.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn count_for_skier_course_week(
        &self,
        skier_id: &SkierId,
        course_id: &CourseId,
        week: u32,
    ) -> Result<u32, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|r| {
                r.skier_id == Some(*skier_id) && r.course_id == Some(*course_id) && r.week == week
            })
            .count() as u32)
    }

    async fn count_for_course_week(
        &self,
        course_id: &CourseId,
        week: u32,
    ) -> Result<u32, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|r| r.course_id == Some(*course_id) && r.week == week)
            .count() as u32)
    }

    async fn weeks_for_course(&self, course_id: &CourseId) -> Result<Vec<u32>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|r| r.course_id == Some(*course_id))
            .map(|r| r.week)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_roundtrips() {
        let store = InMemoryRegistrationRepository::new();
        let reg = Registration::complete(RegistrationId::new(), 3, SkierId::new(), CourseId::new());

        store.save(&reg).await.unwrap();
        let found = store.find_by_id(&reg.id).await.unwrap();
        assert_eq!(found, Some(reg));
    }

    #[tokio::test]
    async fn counts_only_matching_triple() {
        let store = InMemoryRegistrationRepository::new();
        let skier = SkierId::new();
        let course = CourseId::new();

        store
            .save(&Registration::complete(RegistrationId::new(), 3, skier, course))
            .await
            .unwrap();
        store
            .save(&Registration::complete(RegistrationId::new(), 4, skier, course))
            .await
            .unwrap();

        let count = store
            .count_for_skier_course_week(&skier, &course, 3)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn drafts_do_not_count_toward_bucket() {
        let store = InMemoryRegistrationRepository::new();
        let course = CourseId::new();

        let mut draft = Registration::draft(RegistrationId::new(), 3);
        draft.attach_skier(SkierId::new());
        store.save(&draft).await.unwrap();

        let count = store.count_for_course_week(&course, 3).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn weeks_for_course_lists_attached_weeks() {
        let store = InMemoryRegistrationRepository::new();
        let course = CourseId::new();

        for week in [2, 5, 5] {
            store
                .save(&Registration::complete(
                    RegistrationId::new(),
                    week,
                    SkierId::new(),
                    course,
                ))
                .await
                .unwrap();
        }

        let mut weeks = store.weeks_for_course(&course).await.unwrap();
        weeks.sort_unstable();
        assert_eq!(weeks, vec![2, 5, 5]);
    }
}
