//! Course domain module.
//!
//! A course is a bookable weekly activity. Its category governs which
//! skiers may enroll and whether the capacity ceiling applies.
//!
//! # Module Structure
//!
//! - `category` - CourseCategory and the age-eligibility policy
//! - `support` - Support, the course delivery medium

mod category;
mod support;

pub use category::CourseCategory;
pub use support::Support;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CourseId;

/// Course entity - a bookable weekly activity.
///
/// Category is immutable once created; there is no mutator for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub category: CourseCategory,
    pub support: Support,
    pub level: u32,
    /// Price in cents.
    pub price_cents: i64,
    pub time_slot: u32,
}

impl Course {
    pub fn new(
        id: CourseId,
        category: CourseCategory,
        support: Support,
        level: u32,
        price_cents: i64,
        time_slot: u32,
    ) -> Self {
        Self {
            id,
            category,
            support,
            level,
            price_cents,
            time_slot,
        }
    }

    /// Whether the per-(course, week) capacity ceiling applies.
    ///
    /// Individual lessons are not capacity-limited.
    pub fn is_capacity_limited(&self) -> bool {
        self.category != CourseCategory::Individual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_courses_are_not_capacity_limited() {
        let course = Course::new(
            CourseId::new(),
            CourseCategory::Individual,
            Support::Ski,
            2,
            12_000,
            1,
        );
        assert!(!course.is_capacity_limited());
    }

    #[test]
    fn collective_courses_are_capacity_limited() {
        let children = Course::new(
            CourseId::new(),
            CourseCategory::CollectiveChildren,
            Support::Ski,
            1,
            8_000,
            1,
        );
        let adults = Course::new(
            CourseId::new(),
            CourseCategory::CollectiveAdult,
            Support::Snowboard,
            3,
            9_000,
            2,
        );
        assert!(children.is_capacity_limited());
        assert!(adults.is_capacity_limited());
    }
}
