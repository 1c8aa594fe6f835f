use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of occurrences one expansion call will walk
/// through for a single event. Occurrences that end up skipped still count
/// toward the bound.
pub const MAX_EXPANDED_INSTANCES: usize = 365;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
}

impl RecurrencePattern {
    /// Calendar date of the nth occurrence counted from the anchor date.
    ///
    /// Monthly steps clamp to the last day of shorter months. Offsets are
    /// taken from the anchor, not the previous occurrence, so the clamp does
    /// not stick: Jan 31 -> Feb 28 -> Mar 31.
    pub fn nth_occurrence_date(self, anchor: NaiveDate, n: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => anchor.checked_add_days(Days::new(u64::from(n))),
            Self::Weekly => anchor.checked_add_days(Days::new(u64::from(n) * 7)),
            Self::Fortnightly => anchor.checked_add_days(Days::new(u64::from(n) * 14)),
            Self::Monthly => anchor.checked_add_months(Months::new(n)),
        }
    }
}

/// How an event repeats, and optionally the last date an occurrence may
/// start on (inclusive).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub pattern: RecurrencePattern,
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn daily_steps_one_day_at_a_time() {
        let anchor = date(2025, 1, 30);
        let pattern = RecurrencePattern::Daily;
        assert_eq!(pattern.nth_occurrence_date(anchor, 0), Some(anchor));
        assert_eq!(pattern.nth_occurrence_date(anchor, 1), Some(date(2025, 1, 31)));
        assert_eq!(pattern.nth_occurrence_date(anchor, 2), Some(date(2025, 2, 1)));
        assert_eq!(pattern.nth_occurrence_date(anchor, 31), Some(date(2025, 3, 2)));
    }

    #[test]
    fn weekly_and_fortnightly_keep_the_weekday() {
        let anchor = date(2025, 6, 2);
        assert_eq!(
            RecurrencePattern::Weekly.nth_occurrence_date(anchor, 2),
            Some(date(2025, 6, 16))
        );
        assert_eq!(
            RecurrencePattern::Fortnightly.nth_occurrence_date(anchor, 2),
            Some(date(2025, 6, 30))
        );
        assert_eq!(
            RecurrencePattern::Weekly.nth_occurrence_date(anchor, 2).unwrap().weekday(),
            anchor.weekday()
        );
    }

    #[test]
    fn monthly_clamps_to_short_months_without_sticking() {
        let anchor = date(2025, 1, 31);
        let pattern = RecurrencePattern::Monthly;
        assert_eq!(pattern.nth_occurrence_date(anchor, 1), Some(date(2025, 2, 28)));
        assert_eq!(pattern.nth_occurrence_date(anchor, 2), Some(date(2025, 3, 31)));
        assert_eq!(pattern.nth_occurrence_date(anchor, 3), Some(date(2025, 4, 30)));
    }

    #[test]
    fn monthly_clamp_honors_leap_years() {
        let anchor = date(2024, 1, 31);
        assert_eq!(
            RecurrencePattern::Monthly.nth_occurrence_date(anchor, 1),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            RecurrencePattern::Monthly.nth_occurrence_date(anchor, 13),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn monthly_crosses_year_boundaries() {
        let anchor = date(2025, 11, 15);
        assert_eq!(
            RecurrencePattern::Monthly.nth_occurrence_date(anchor, 3),
            Some(date(2026, 2, 15))
        );
    }
}
