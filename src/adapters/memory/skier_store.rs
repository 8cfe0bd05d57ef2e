//! In-memory skier store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SkierId};
use crate::domain::skier::Skier;
use crate::ports::SkierRepository;

/// In-memory implementation of [`SkierRepository`].
#[derive(Debug, Default)]
pub struct InMemorySkierRepository {
    rows: RwLock<HashMap<SkierId, Skier>>,
}

impl InMemorySkierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkierRepository for InMemorySkierRepository {
    async fn save(&self, skier: &Skier) -> Result<(), DomainError> {
        self.rows.write().await.insert(skier.id, skier.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SkierId) -> Result<Option<Skier>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}
