//! Course categories and the age-eligibility policy.
//!
//! Each category carries its own admission rule, so the decision is a
//! method on the enum rather than an open-ended conditional chain in the
//! coordinator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold separating children's and adult collective courses, in years.
pub const ADULT_AGE_YEARS: u32 = 16;

/// Category of a course, governing eligibility and capacity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseCategory {
    /// One-on-one lesson; open to any age, not capacity-limited.
    Individual,
    /// Group lesson for skiers under 16.
    CollectiveChildren,
    /// Group lesson for skiers 16 and over. The default for any
    /// non-children collective course.
    CollectiveAdult,
}

impl CourseCategory {
    /// Whether a skier of the given age (in whole elapsed years) may
    /// enroll in a course of this category.
    pub fn admits(&self, age_years: u32) -> bool {
        match self {
            CourseCategory::Individual => true,
            CourseCategory::CollectiveChildren => age_years < ADULT_AGE_YEARS,
            CourseCategory::CollectiveAdult => age_years >= ADULT_AGE_YEARS,
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseCategory::Individual => "INDIVIDUAL",
            CourseCategory::CollectiveChildren => "COLLECTIVE_CHILDREN",
            CourseCategory::CollectiveAdult => "COLLECTIVE_ADULT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn individual_admits_any_age() {
        assert!(CourseCategory::Individual.admits(0));
        assert!(CourseCategory::Individual.admits(15));
        assert!(CourseCategory::Individual.admits(16));
        assert!(CourseCategory::Individual.admits(99));
    }

    #[test]
    fn children_course_admits_under_16_only() {
        assert!(CourseCategory::CollectiveChildren.admits(10));
        assert!(CourseCategory::CollectiveChildren.admits(15));
        assert!(!CourseCategory::CollectiveChildren.admits(16));
        assert!(!CourseCategory::CollectiveChildren.admits(30));
    }

    #[test]
    fn adult_course_admits_16_and_over() {
        assert!(CourseCategory::CollectiveAdult.admits(16));
        assert!(CourseCategory::CollectiveAdult.admits(45));
        assert!(!CourseCategory::CollectiveAdult.admits(15));
    }

    #[test]
    fn serializes_in_wire_casing() {
        let json = serde_json::to_string(&CourseCategory::CollectiveChildren).unwrap();
        assert_eq!(json, "\"COLLECTIVE_CHILDREN\"");
    }

    proptest! {
        #[test]
        fn collective_categories_partition_every_age(age in 0u32..120) {
            let child = CourseCategory::CollectiveChildren.admits(age);
            let adult = CourseCategory::CollectiveAdult.admits(age);
            prop_assert!(child != adult);
        }
    }
}
