//! CreateSubscriptionHandler - create a subscription with a derived
//! validity window.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SubscriptionId};
use crate::domain::subscription::{PlanType, Subscription};
use crate::ports::SubscriptionRepository;

/// Command to create a subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub plan: PlanType,
    pub start_date: NaiveDate,
    pub price_cents: i64,
}

/// Handler creating subscriptions; the end date is always derived from the
/// plan, never taken from input.
pub struct CreateSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<Subscription, DomainError> {
        let subscription = Subscription::new(
            SubscriptionId::new(),
            cmd.plan,
            cmd.start_date,
            cmd.price_cents,
        )
        .ok_or_else(|| DomainError::validation("start_date", "start date out of range"))?;

        self.subscriptions.save(&subscription).await?;

        tracing::debug!(
            subscription = %subscription.id,
            plan = %subscription.plan,
            end_date = %subscription.end_date,
            "subscription created"
        );
        Ok(subscription)
    }
}
