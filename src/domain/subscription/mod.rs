//! Subscription domain module.
//!
//! A subscription grants a skier access to the station for a validity
//! window. The end of the window is always derived from the start date and
//! the plan type, never stored independently.
//!
//! # Module Structure
//!
//! - `plan` - PlanType and end-date arithmetic

mod plan;

pub use plan::PlanType;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SubscriptionId;

/// Subscription entity - a skier's access window to the station.
///
/// # Invariants
///
/// - `end_date` is exactly `plan.end_date(start_date)`; it is recomputed on
///   every create and update and never drifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub plan: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Price in cents.
    pub price_cents: i64,
}

impl Subscription {
    /// Create a subscription, deriving the end date from the plan.
    ///
    /// Returns `None` only when the start date is so far in the future that
    /// the calendar addition overflows.
    pub fn new(
        id: SubscriptionId,
        plan: PlanType,
        start_date: NaiveDate,
        price_cents: i64,
    ) -> Option<Self> {
        let end_date = plan.end_date(start_date)?;
        Some(Self {
            id,
            plan,
            start_date,
            end_date,
            price_cents,
        })
    }

    /// Replace plan and start date, recomputing the end date.
    pub fn reschedule(&mut self, plan: PlanType, start_date: NaiveDate) -> Option<()> {
        self.end_date = plan.end_date(start_date)?;
        self.plan = plan;
        self.start_date = start_date;
        Some(())
    }

    /// Whether the subscription covers the given date.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
