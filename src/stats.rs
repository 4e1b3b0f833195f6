//! Daily statistics over the collected hourly records

use crate::data::{DailyMetrics, DailyStatistics, HourlyRecord, MetricStats};

/// Computes max/min/average for temperature, humidity, pressure and wind speed.
///
/// Returns empty statistics when `records` is empty. NaN values are not
/// filtered and propagate into the result.
pub fn calculate_daily_stats(records: &[HourlyRecord]) -> DailyStatistics {
    if records.is_empty() {
        return DailyStatistics::default();
    }

    DailyStatistics {
        metrics: Some(DailyMetrics {
            temperature: metric(records, |r| r.temp),
            humidity: metric(records, |r| r.humidity),
            pressure: metric(records, |r| r.pressure),
            wind_speed: metric(records, |r| r.wind_speed),
        }),
    }
}

fn metric<F>(records: &[HourlyRecord], field: F) -> MetricStats
where
    F: Fn(&HourlyRecord) -> f64,
{
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0;

    for value in records.iter().map(field) {
        // f64::max/min skip NaN; a NaN anywhere must poison the result instead
        if value.is_nan() || max.is_nan() {
            max = f64::NAN;
            min = f64::NAN;
        } else {
            max = max.max(value);
            min = min.min(value);
        }
        sum += value;
    }

    MetricStats {
        max,
        min,
        avg: sum / records.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::record;

    #[test]
    fn test_empty_records_give_empty_statistics() {
        let stats = calculate_daily_stats(&[]);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_single_record() {
        let stats = calculate_daily_stats(&[record(0, 5.0, 60.0, 1015.0, 3.0)]);
        let metrics = stats.metrics.unwrap();
        assert_eq!(
            metrics.temperature,
            MetricStats {
                max: 5.0,
                min: 5.0,
                avg: 5.0
            }
        );
        assert_eq!(metrics.humidity.avg, 60.0);
    }

    #[test]
    fn test_max_min_avg() {
        let records = vec![
            record(0, 2.0, 80.0, 1010.0, 1.0),
            record(1, -1.0, 90.0, 1012.0, 4.0),
            record(2, 8.0, 40.0, 1008.0, 2.5),
        ];
        let metrics = calculate_daily_stats(&records).metrics.unwrap();

        assert_eq!(metrics.temperature.max, 8.0);
        assert_eq!(metrics.temperature.min, -1.0);
        assert!((metrics.temperature.avg - 3.0).abs() < 1e-9);

        assert_eq!(metrics.humidity.max, 90.0);
        assert_eq!(metrics.humidity.min, 40.0);
        assert!((metrics.humidity.avg - 70.0).abs() < 1e-9);

        assert_eq!(metrics.pressure.max, 1012.0);
        assert_eq!(metrics.pressure.min, 1008.0);
        assert!((metrics.pressure.avg - 1010.0).abs() < 1e-9);

        assert_eq!(metrics.wind_speed.max, 4.0);
        assert_eq!(metrics.wind_speed.min, 1.0);
        assert!((metrics.wind_speed.avg - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let mut records = vec![
            record(0, 3.0, 50.0, 1000.0, 1.0),
            record(1, 7.5, 55.0, 1001.0, 6.0),
            record(2, 0.5, 65.0, 1003.0, 0.0),
            record(3, 4.0, 45.0, 999.0, 2.0),
        ];
        let forward = calculate_daily_stats(&records);
        records.reverse();
        let backward = calculate_daily_stats(&records);

        let (f, b) = (forward.metrics.unwrap(), backward.metrics.unwrap());
        assert_eq!(f.temperature.max, b.temperature.max);
        assert_eq!(f.temperature.min, b.temperature.min);
        assert!((f.temperature.avg - b.temperature.avg).abs() < 1e-9);
        assert_eq!(f.wind_speed, b.wind_speed);
    }

    #[test]
    fn test_average_between_min_and_max() {
        let records: Vec<_> = (0..24)
            .map(|h| {
                let h_f = f64::from(h);
                record(h, (h_f * 0.7).sin() * 6.0, 40.0 + h_f, 1000.0 + h_f / 3.0, h_f / 4.0)
            })
            .collect();
        let metrics = calculate_daily_stats(&records).metrics.unwrap();

        for m in [metrics.temperature, metrics.humidity, metrics.pressure, metrics.wind_speed] {
            assert!(m.min <= m.avg && m.avg <= m.max, "{:?}", m);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let records = vec![
            record(0, 1.0, 50.0, 1000.0, 1.0),
            record(1, f64::NAN, 50.0, 1000.0, 1.0),
            record(2, 3.0, 50.0, 1000.0, 1.0),
        ];
        let metrics = calculate_daily_stats(&records).metrics.unwrap();
        assert!(metrics.temperature.max.is_nan());
        assert!(metrics.temperature.min.is_nan());
        assert!(metrics.temperature.avg.is_nan());
        assert_eq!(metrics.humidity.max, 50.0);
    }
}
