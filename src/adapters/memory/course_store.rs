//! In-memory course store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError};
use crate::ports::CourseRepository;

/// In-memory implementation of [`CourseRepository`].
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    rows: RwLock<HashMap<CourseId, Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        self.rows.write().await.insert(course.id, course.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}
