//! CreateSkierHandler - register a new skier, optionally opening a
//! subscription alongside.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SkierId, SubscriptionId};
use crate::domain::skier::Skier;
use crate::domain::subscription::{PlanType, Subscription};
use crate::ports::{SkierRepository, SubscriptionRepository};

/// Subscription terms opened together with a new skier.
#[derive(Debug, Clone)]
pub struct SubscriptionTerms {
    pub plan: PlanType,
    pub start_date: NaiveDate,
    pub price_cents: i64,
}

/// Command to create a skier.
#[derive(Debug, Clone)]
pub struct CreateSkierCommand {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub date_of_birth: NaiveDate,
    pub subscription: Option<SubscriptionTerms>,
}

/// Handler creating skiers. When subscription terms are given, the
/// subscription is persisted first and linked by id; its end date is
/// derived from the plan.
pub struct CreateSkierHandler {
    skiers: Arc<dyn SkierRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl CreateSkierHandler {
    pub fn new(
        skiers: Arc<dyn SkierRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            skiers,
            subscriptions,
        }
    }

    pub async fn handle(&self, cmd: CreateSkierCommand) -> Result<Skier, DomainError> {
        let mut skier = Skier::new(
            SkierId::new(),
            cmd.first_name,
            cmd.last_name,
            cmd.city,
            cmd.date_of_birth,
        );

        if let Some(terms) = cmd.subscription {
            let subscription = Subscription::new(
                SubscriptionId::new(),
                terms.plan,
                terms.start_date,
                terms.price_cents,
            )
            .ok_or_else(|| DomainError::validation("start_date", "start date out of range"))?;
            self.subscriptions.save(&subscription).await?;
            skier.attach_subscription(subscription.id);
        }

        self.skiers.save(&skier).await?;

        tracing::debug!(
            skier = %skier.id,
            subscription = ?skier.subscription_id,
            "skier created"
        );
        Ok(skier)
    }
}
