//! UpdateSubscriptionHandler - reschedule a subscription, recomputing its
//! validity window.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId};
use crate::domain::subscription::{PlanType, Subscription};
use crate::ports::SubscriptionRepository;

/// Command to change a subscription's plan, start date or price.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub subscription_id: SubscriptionId,
    pub plan: PlanType,
    pub start_date: NaiveDate,
    pub price_cents: i64,
}

/// Handler updating subscriptions. The end date is recomputed from the new
/// plan and start date so it never drifts from them.
pub struct UpdateSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
    ) -> Result<Subscription, DomainError> {
        let Some(mut subscription) = self
            .subscriptions
            .find_by_id(&cmd.subscription_id)
            .await?
        else {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("Subscription {} not found", cmd.subscription_id),
            ));
        };

        subscription
            .reschedule(cmd.plan, cmd.start_date)
            .ok_or_else(|| DomainError::validation("start_date", "start date out of range"))?;
        subscription.price_cents = cmd.price_cents;

        self.subscriptions.update(&subscription).await?;

        tracing::debug!(
            subscription = %subscription.id,
            plan = %subscription.plan,
            end_date = %subscription.end_date,
            "subscription updated"
        );
        Ok(subscription)
    }
}
