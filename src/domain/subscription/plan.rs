//! Subscription plan types and validity-window arithmetic.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription duration class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Annual,
    Semestriel,
    Monthly,
}

impl PlanType {
    /// Number of calendar months the plan covers.
    pub fn months(&self) -> u32 {
        match self {
            PlanType::Annual => 12,
            PlanType::Semestriel => 6,
            PlanType::Monthly => 1,
        }
    }

    /// Expiration date for a subscription starting on `start_date`.
    ///
    /// Calendar-correct month addition: when the target month is shorter,
    /// the day clamps to the month end (2024-01-31 + 1 month = 2024-02-29,
    /// 2024-02-29 + 12 months = 2025-02-28). `None` only on date overflow.
    pub fn end_date(&self, start_date: NaiveDate) -> Option<NaiveDate> {
        start_date.checked_add_months(Months::new(self.months()))
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanType::Annual => "ANNUAL",
            PlanType::Semestriel => "SEMESTRIEL",
            PlanType::Monthly => "MONTHLY",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn annual_adds_one_year() {
        let end = PlanType::Annual.end_date(date(2024, 3, 15)).unwrap();
        assert_eq!(end, date(2025, 3, 15));
    }

    #[test]
    fn semestriel_adds_six_months() {
        let end = PlanType::Semestriel.end_date(date(2024, 1, 10)).unwrap();
        assert_eq!(end, date(2024, 7, 10));
    }

    #[test]
    fn monthly_adds_one_month() {
        let end = PlanType::Monthly.end_date(date(2024, 3, 15)).unwrap();
        assert_eq!(end, date(2024, 4, 15));
    }

    #[test]
    fn annual_from_leap_day_clamps_to_feb_28() {
        let end = PlanType::Annual.end_date(date(2024, 2, 29)).unwrap();
        assert_eq!(end, date(2025, 2, 28));
    }

    #[test]
    fn monthly_from_jan_31_lands_on_leap_day() {
        let end = PlanType::Monthly.end_date(date(2024, 1, 31)).unwrap();
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn monthly_from_jan_31_non_leap_clamps_to_feb_28() {
        let end = PlanType::Monthly.end_date(date(2023, 1, 31)).unwrap();
        assert_eq!(end, date(2023, 2, 28));
    }

    #[test]
    fn serializes_in_wire_casing() {
        let json = serde_json::to_string(&PlanType::Semestriel).unwrap();
        assert_eq!(json, "\"SEMESTRIEL\"");
    }

    proptest! {
        #[test]
        fn end_date_is_always_after_start(
            year in 1990i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            plan in prop_oneof![
                Just(PlanType::Annual),
                Just(PlanType::Semestriel),
                Just(PlanType::Monthly),
            ],
        ) {
            let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let end = plan.end_date(start).unwrap();
            prop_assert!(end > start);
        }

        #[test]
        fn longer_plans_never_end_earlier(
            year in 1990i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let monthly = PlanType::Monthly.end_date(start).unwrap();
            let semestriel = PlanType::Semestriel.end_date(start).unwrap();
            let annual = PlanType::Annual.end_date(start).unwrap();
            prop_assert!(monthly <= semestriel);
            prop_assert!(semestriel <= annual);
        }
    }
}
