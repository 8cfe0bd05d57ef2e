//! In-memory instructor store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, InstructorId};
use crate::domain::instructor::Instructor;
use crate::ports::InstructorRepository;

/// In-memory implementation of [`InstructorRepository`].
#[derive(Debug, Default)]
pub struct InMemoryInstructorRepository {
    rows: RwLock<HashMap<InstructorId, Instructor>>,
}

impl InMemoryInstructorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstructorRepository for InMemoryInstructorRepository {
    async fn save(&self, instructor: &Instructor) -> Result<(), DomainError> {
        self.rows
            .write()
            .await
            .insert(instructor.id, instructor.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InstructorId) -> Result<Option<Instructor>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn save_then_find_roundtrips() {
        let store = InMemoryInstructorRepository::new();
        let instructor = Instructor::new(
            InstructorId::new(),
            "Paul",
            "Girard",
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
        );

        store.save(&instructor).await.unwrap();
        assert_eq!(
            store.find_by_id(&instructor.id).await.unwrap(),
            Some(instructor)
        );
    }
}
