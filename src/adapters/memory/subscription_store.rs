//! In-memory subscription store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// In-memory implementation of [`SubscriptionRepository`].
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    rows: RwLock<HashMap<SubscriptionId, Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.rows
            .write()
            .await
            .insert(subscription.id, subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&subscription.id) {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("Subscription {} not found", subscription.id),
            ));
        }
        rows.insert(subscription.id, subscription.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::PlanType;
    use chrono::NaiveDate;

    fn sample() -> Subscription {
        Subscription::new(
            SubscriptionId::new(),
            PlanType::Monthly,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            5_000,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find_roundtrips() {
        let store = InMemorySubscriptionRepository::new();
        let sub = sample();
        store.save(&sub).await.unwrap();
        assert_eq!(store.find_by_id(&sub.id).await.unwrap(), Some(sub));
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let store = InMemorySubscriptionRepository::new();
        let err = store.update(&sample()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SubscriptionNotFound);
    }

    #[tokio::test]
    async fn update_replaces_existing() {
        let store = InMemorySubscriptionRepository::new();
        let mut sub = sample();
        store.save(&sub).await.unwrap();

        sub.reschedule(PlanType::Annual, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .unwrap();
        store.update(&sub).await.unwrap();

        let stored = store.find_by_id(&sub.id).await.unwrap().unwrap();
        assert_eq!(stored.plan, PlanType::Annual);
    }
}
