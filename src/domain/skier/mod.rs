//! Skier domain module.
//!
//! Relations are foreign keys, not embedded object graphs: a skier holds a
//! `SubscriptionId` and a set of `PisteId`s; registrations reference the
//! skier from their own side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{PisteId, SkierId, SubscriptionId};

/// Skier entity - a person enrolling in courses.
///
/// Age is derived from `date_of_birth`, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skier {
    pub id: SkierId,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub date_of_birth: NaiveDate,
    pub subscription_id: Option<SubscriptionId>,
    pub piste_ids: HashSet<PisteId>,
}

impl Skier {
    pub fn new(
        id: SkierId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            date_of_birth,
            subscription_id: None,
            piste_ids: HashSet::new(),
        }
    }

    /// Whole elapsed years between date of birth and `date`.
    ///
    /// Counts completed years, so the value only increases on the
    /// birthday itself. Returns 0 when `date` precedes the birth date.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.date_of_birth).unwrap_or(0)
    }

    pub fn attach_subscription(&mut self, subscription_id: SubscriptionId) {
        self.subscription_id = Some(subscription_id);
    }

    pub fn add_piste(&mut self, piste_id: PisteId) {
        self.piste_ids.insert(piste_id);
    }
}
