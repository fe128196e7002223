//! Forecast aggregation
//!
//! Reduces a 3-hourly forecast to one summary per calendar day. Samples are
//! bucketed by date in first-seen order. The first bucket holds the rest of
//! today and is dropped. Every other bucket becomes a [`DailySummary`] with the
//! mean temperature and the most frequent description of its samples.

use std::collections::HashMap;

use chrono::NaiveDate;
use domain::{DailySummary, ForecastSample, Temperature, TemperatureUnit};

/// Samples that fall on one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket<'a> {
    pub date: NaiveDate,
    pub samples: Vec<&'a ForecastSample>,
}

/// Group samples by calendar date, preserving the order dates are first seen
///
/// A sample whose date was already seen joins the existing bucket even if
/// other dates came in between.
pub fn group_by_date(samples: &[ForecastSample]) -> Vec<DateBucket<'_>> {
    let mut buckets: Vec<DateBucket<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.date();
        let slot = *index.entry(date).or_insert_with(|| {
            buckets.push(DateBucket {
                date,
                samples: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].samples.push(sample);
    }

    buckets
}

/// Arithmetic mean of the sample temperatures, `None` for an empty slice
#[allow(clippy::cast_precision_loss)]
pub fn mean_temperature(samples: &[&ForecastSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: f64 = samples.iter().map(|s| s.temperature).sum();
    Some(sum / samples.len() as f64)
}

/// Most frequent description; ties go to the description seen first
pub fn most_frequent_description<'a>(samples: &[&'a ForecastSample]) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for sample in samples {
        let description = sample.description.as_str();
        match counts.iter_mut().find(|(d, _)| *d == description) {
            Some((_, n)) => *n += 1,
            None => counts.push((description, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (description, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((description, n));
        }
    }
    best.map(|(d, _)| d)
}

/// Summarize every forecast day after the first
///
/// `unit` labels the sample temperatures; no conversion happens here.
pub fn aggregate_daily(samples: &[ForecastSample], unit: TemperatureUnit) -> Vec<DailySummary> {
    group_by_date(samples)
        .into_iter()
        .skip(1)
        .filter_map(|bucket| {
            let average = mean_temperature(&bucket.samples)?;
            let description = most_frequent_description(&bucket.samples)?;
            Some(DailySummary {
                date: bucket.date,
                average_temperature: Temperature::new(average, unit),
                description: description.to_string(),
                samples: bucket.samples.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn sample(ts: &str, temperature: f64, description: &str) -> ForecastSample {
        let timestamp = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        ForecastSample::new(timestamp, temperature, description)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(aggregate_daily(&[], TemperatureUnit::Celsius).is_empty());
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn single_date_is_skipped() {
        let samples = vec![
            sample("2024-06-01 12:00:00", 20.0, "clear sky"),
            sample("2024-06-01 15:00:00", 22.0, "clear sky"),
        ];
        assert!(aggregate_daily(&samples, TemperatureUnit::Celsius).is_empty());
    }

    #[test]
    fn first_bucket_is_skipped_and_order_preserved() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 15.0, "clear sky"),
            sample("2024-06-02 00:00:00", 10.0, "light rain"),
            sample("2024-06-02 03:00:00", 12.0, "light rain"),
            sample("2024-06-03 00:00:00", 8.0, "snow"),
        ];

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date("2024-06-02"));
        assert_eq!(days[1].date, date("2024-06-03"));
    }

    #[test]
    fn average_divides_by_bucket_size() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 100.0, "x"),
            sample("2024-06-02 00:00:00", 10.0, "a"),
            sample("2024-06-02 03:00:00", 11.0, "a"),
            sample("2024-06-02 06:00:00", 15.0, "a"),
        ];

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert_eq!(days.len(), 1);
        assert!((days[0].average_temperature.value() - 12.0).abs() < 1e-9);
        assert_eq!(days[0].samples, 3);
    }

    #[test]
    fn most_frequent_description_wins() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 0.0, "x"),
            sample("2024-06-02 00:00:00", 0.0, "clear sky"),
            sample("2024-06-02 03:00:00", 0.0, "light rain"),
            sample("2024-06-02 06:00:00", 0.0, "light rain"),
            sample("2024-06-02 09:00:00", 0.0, "clear sky"),
            sample("2024-06-02 12:00:00", 0.0, "light rain"),
        ];

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert_eq!(days[0].description, "light rain");
    }

    #[test]
    fn description_tie_goes_to_first_seen() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 0.0, "x"),
            sample("2024-06-02 00:00:00", 0.0, "overcast clouds"),
            sample("2024-06-02 03:00:00", 0.0, "few clouds"),
            sample("2024-06-02 06:00:00", 0.0, "few clouds"),
            sample("2024-06-02 09:00:00", 0.0, "overcast clouds"),
        ];

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert_eq!(days[0].description, "overcast clouds");
    }

    #[test]
    fn late_sample_joins_existing_bucket() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 0.0, "x"),
            sample("2024-06-02 00:00:00", 10.0, "a"),
            sample("2024-06-03 00:00:00", 5.0, "b"),
            sample("2024-06-02 03:00:00", 20.0, "a"),
        ];

        let buckets = group_by_date(&samples);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[1].date, date("2024-06-02"));
        assert_eq!(buckets[1].samples.len(), 2);

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert!((days[0].average_temperature.value() - 15.0).abs() < 1e-9);
        assert_eq!(days[1].date, date("2024-06-03"));
    }

    #[test]
    fn unit_is_attached_without_conversion() {
        let samples = vec![
            sample("2024-06-01 21:00:00", 70.0, "x"),
            sample("2024-06-02 00:00:00", 70.0, "a"),
        ];
        let days = aggregate_daily(&samples, TemperatureUnit::Fahrenheit);
        assert_eq!(
            days[0].average_temperature.unit(),
            TemperatureUnit::Fahrenheit
        );
        assert!((days[0].average_temperature.value() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn typical_five_day_forecast_yields_five_days() {
        // 40 samples at 3h intervals starting mid-afternoon span six dates
        let start = NaiveDateTime::parse_from_str("2024-06-01 15:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let samples: Vec<_> = (0..40)
            .map(|i| {
                ForecastSample::new(
                    start + chrono::Duration::hours(3 * i),
                    f64::from(i32::try_from(i).unwrap()),
                    "clouds",
                )
            })
            .collect();

        let days = aggregate_daily(&samples, TemperatureUnit::Celsius);
        assert_eq!(days.len(), 5);
        assert!(days.iter().take(4).all(|d| d.samples == 8));
    }

    #[test]
    fn most_frequent_of_empty_is_none() {
        assert!(most_frequent_description(&[]).is_none());
        assert!(mean_temperature(&[]).is_none());
    }
}
