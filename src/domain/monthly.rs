//! Monthly bucketing of daily archive readings.
//!
//! The only piece of real arithmetic in the app: daily mean temperatures
//! from the trailing year are grouped per calendar month and averaged for
//! the climate chart.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::weather::ArchiveDay;
use crate::i18n::{Language, month_short};

/// One averaged point on the monthly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub label: String,
    pub temperature_c: f64,
    pub timestamp: NaiveDate,
}

struct Bucket {
    sum: f64,
    count: u32,
    first_date: NaiveDate,
}

/// Groups daily readings by (year, month) and averages the valid ones.
///
/// Null and NaN readings are excluded from both sum and count; a month with
/// no valid reading produces no point at all. Output is sorted ascending by
/// the first date seen in each month and carries a localized
/// "short month + year" label. Pure and idempotent.
#[must_use]
pub fn monthly_series(days: &[ArchiveDay], lang: Language) -> Vec<MonthlyPoint> {
    let mut buckets: HashMap<(i32, u32), Bucket> = HashMap::new();

    for day in days {
        let key = (day.date.year(), day.date.month());
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            sum: 0.0,
            count: 0,
            first_date: day.date,
        });

        let Some(temp) = day.temperature_mean_c else {
            continue;
        };
        if temp.is_nan() {
            continue;
        }
        bucket.sum += f64::from(temp);
        bucket.count += 1;
    }

    let mut points: Vec<MonthlyPoint> = buckets
        .into_values()
        .filter(|bucket| bucket.count > 0)
        .map(|bucket| MonthlyPoint {
            label: format!(
                "{} {}",
                month_short(lang, bucket.first_date.month()),
                bucket.first_date.year()
            ),
            temperature_c: bucket.sum / f64::from(bucket.count),
            timestamp: bucket.first_date,
        })
        .collect();

    points.sort_by_key(|point| point.timestamp);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, temp: Option<f32>) -> ArchiveDay {
        ArchiveDay {
            date: NaiveDate::from_ymd_opt(y, m, d).expect("valid test date"),
            temperature_mean_c: temp,
        }
    }

    #[test]
    fn averages_january_and_drops_empty_february() {
        let days = [
            day(2026, 1, 1, Some(10.0)),
            day(2026, 1, 15, Some(14.0)),
            day(2026, 2, 1, None),
        ];

        let points = monthly_series(&days, Language::En);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Jan 2026");
        assert!((points[0].temperature_c - 12.0).abs() < 1e-9);
    }

    #[test]
    fn nan_readings_are_not_treated_as_zero() {
        let days = [day(2026, 3, 1, Some(f32::NAN)), day(2026, 3, 2, Some(6.0))];

        let points = monthly_series(&days, Language::En);
        assert_eq!(points.len(), 1);
        assert!((points[0].temperature_c - 6.0).abs() < 1e-9);
    }

    #[test]
    fn output_is_sorted_across_year_boundary() {
        let days = [
            day(2026, 1, 3, Some(2.0)),
            day(2025, 12, 20, Some(4.0)),
            day(2025, 11, 5, Some(8.0)),
        ];

        let points = monthly_series(&days, Language::En);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Nov 2025", "Dec 2025", "Jan 2026"]);
    }

    #[test]
    fn same_month_in_different_years_stays_separate() {
        let days = [day(2025, 6, 1, Some(20.0)), day(2026, 6, 1, Some(30.0))];

        let points = monthly_series(&days, Language::En);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Jun 2025");
        assert_eq!(points[1].label, "Jun 2026");
    }

    #[test]
    fn rerun_on_same_input_is_identical() {
        let days = [
            day(2026, 1, 1, Some(1.5)),
            day(2026, 1, 2, None),
            day(2026, 2, 10, Some(3.25)),
        ];

        assert_eq!(
            monthly_series(&days, Language::En),
            monthly_series(&days, Language::En)
        );
    }

    #[test]
    fn persian_labels_use_persian_month_names() {
        let days = [day(2026, 1, 1, Some(0.0))];

        let points = monthly_series(&days, Language::Fa);
        assert_eq!(points[0].label, "ژانویه 2026");
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(monthly_series(&[], Language::En).is_empty());
    }
}
