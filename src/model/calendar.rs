use crate::model::constants::ELIGIBILITY_MONTHS;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Half-open date interval `[start, end)` during which a round still counts
/// toward the next published rating.
///
/// The start date is inclusive: a round played exactly one year before the
/// publication date is still eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    pub start: NaiveDate,
    pub end: NaiveDate
}

impl EligibilityWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// The second Tuesday of `date`'s month. Ratings are published on this day.
///
/// Walks forward from the 1st to the first Tuesday, then one more week. When
/// the 1st is itself a Tuesday the offset is zero and the result is the 8th.
pub fn second_tuesday(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    let first = date.with_day(1).unwrap();
    let offset = (Weekday::Tue.num_days_from_monday() as i64
        - first.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);

    first + Duration::days(offset + 7)
}

/// The next date on which updated ratings will be published, strictly after
/// `today`. `today` is always injected by the caller; nothing in this module
/// reads a clock.
pub fn next_publication_date(today: NaiveDate) -> NaiveDate {
    let this_month = second_tuesday(today);
    if this_month > today {
        this_month
    } else {
        second_tuesday(first_of_next_month(today))
    }
}

/// The rolling window of rounds that count toward the rating published on
/// `publication_date`.
pub fn eligibility_window(publication_date: NaiveDate) -> EligibilityWindow {
    EligibilityWindow {
        start: publication_date - Months::new(ELIGIBILITY_MONTHS),
        end: publication_date
    }
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap() + Months::new(1)
}

#[cfg(test)]
mod tests {
    use crate::model::calendar::{eligibility_window, next_publication_date, second_tuesday};
    use chrono::{Datelike, Duration, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_second_tuesday_from_friday_first() {
        // 2023-09-01 is a Friday
        assert_eq!(second_tuesday(date(2023, 9, 1)), date(2023, 9, 12));
    }

    #[test]
    fn test_second_tuesday_when_first_is_tuesday() {
        // 2024-10-01 is a Tuesday; the second Tuesday is the 8th
        assert_eq!(second_tuesday(date(2024, 10, 1)), date(2024, 10, 8));
    }

    #[test]
    fn test_second_tuesday_independent_of_day_within_month() {
        assert_eq!(second_tuesday(date(2023, 9, 30)), second_tuesday(date(2023, 9, 1)));
    }

    #[test]
    fn test_second_tuesday_always_between_8th_and_14th() {
        for year in 2020..=2030 {
            for month in 1..=12 {
                let result = second_tuesday(date(year, month, 1));

                assert_eq!(result.weekday(), Weekday::Tue);
                assert!((8..=14).contains(&result.day()), "{result} out of range");
            }
        }
    }

    #[test]
    fn test_next_publication_date_before_this_months() {
        assert_eq!(next_publication_date(date(2023, 9, 5)), date(2023, 9, 12));
    }

    #[test]
    fn test_next_publication_date_on_publication_day_rolls_over() {
        // The returned date must be strictly after today
        assert_eq!(next_publication_date(date(2023, 9, 12)), date(2023, 10, 10));
    }

    #[test]
    fn test_next_publication_date_december_wraps_year() {
        assert_eq!(next_publication_date(date(2023, 12, 20)), date(2024, 1, 9));
    }

    #[test]
    fn test_next_publication_date_strictly_after_today() {
        let mut today = date(2022, 1, 1);
        while today < date(2025, 1, 1) {
            assert!(next_publication_date(today) > today, "not after {today}");
            today = today + Duration::days(1);
        }
    }

    #[test]
    fn test_eligibility_window_spans_one_year() {
        let window = eligibility_window(date(2023, 9, 12));

        assert_eq!(window.start, date(2022, 9, 12));
        assert_eq!(window.end, date(2023, 9, 12));
    }

    #[test]
    fn test_eligibility_window_start_inclusive_end_exclusive() {
        let window = eligibility_window(date(2023, 9, 12));

        assert!(window.contains(date(2022, 9, 12)));
        assert!(window.contains(date(2023, 9, 11)));
        assert!(!window.contains(date(2023, 9, 12)));
        assert!(!window.contains(date(2022, 9, 11)));
    }
}
