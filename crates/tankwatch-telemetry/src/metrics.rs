//! Metric derivation
//!
//! Turns resolved readings into the bounded values clients render: a fill
//! percentage clamped to [0, 100], severity bands, and fleet-level
//! aggregates. The clamp applies to the percentage only; raw levels stay
//! unclamped so the utilization rate can report an overfull fleet honestly.

use crate::model::{DerivedTankReading, LevelBand, TempBand};

/// Fleet-level aggregates over one snapshot's readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FleetTotals {
    pub total_capacity: i64,
    pub total_utilized_volume: f64,
    pub utilization_rate_percent: f64,
}

/// Fill percentage as an integer in [0, 100].
///
/// A non-positive capacity yields 0 rather than dividing by zero; sensor
/// overfill clamps to 100.
pub fn derive_fill_percent(raw_level: f64, capacity: i64) -> u8 {
    if capacity <= 0 {
        return 0;
    }
    let percent = (raw_level / capacity as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

pub fn classify_level(fill_percent: u8) -> LevelBand {
    if fill_percent < 20 {
        LevelBand::Low
    } else if fill_percent < 50 {
        LevelBand::Medium
    } else {
        LevelBand::Good
    }
}

pub fn classify_temperature(raw_temperature: f64) -> TempBand {
    if raw_temperature < 10.0 {
        TempBand::Cold
    } else if raw_temperature > 30.0 {
        TempBand::Hot
    } else {
        TempBand::Normal
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn aggregate(readings: &[DerivedTankReading]) -> FleetTotals {
    let total_capacity: i64 = readings.iter().map(|r| r.capacity).sum();
    let total_utilized_volume: f64 = readings.iter().map(|r| r.raw_level).sum();
    let utilization_rate_percent = if total_capacity > 0 {
        round1(total_utilized_volume / total_capacity as f64 * 100.0)
    } else {
        0.0
    };

    FleetTotals {
        total_capacity,
        total_utilized_volume,
        utilization_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(capacity: i64, raw_level: f64) -> DerivedTankReading {
        let fill_percent = derive_fill_percent(raw_level, capacity);
        DerivedTankReading {
            tank_number: 0,
            name: "test".to_string(),
            capacity,
            raw_level,
            volume_liters: raw_level,
            raw_temperature: 20.0,
            temperature: 20.0,
            fill_percent,
            level_band: classify_level(fill_percent),
            temp_band: classify_temperature(20.0),
            air_pressure: None,
        }
    }

    #[test]
    fn test_fill_percent_basics() {
        assert_eq!(derive_fill_percent(4000.0, 20_000), 20);
        assert_eq!(derive_fill_percent(0.0, 20_000), 0);
        assert_eq!(derive_fill_percent(20_000.0, 20_000), 100);
        // round-half-up at the midpoint
        assert_eq!(derive_fill_percent(125.0, 1000), 13);
    }

    #[test]
    fn test_fill_percent_is_bounded() {
        for raw_level in [0.0, 1.0, 9_999.0, 20_000.0, 55_000.0] {
            let percent = derive_fill_percent(raw_level, 20_000);
            assert!(percent <= 100, "percent {} out of range", percent);
        }
    }

    #[test]
    fn test_fill_percent_clamps_overfill_and_negative() {
        assert_eq!(derive_fill_percent(25_000.0, 20_000), 100);
        assert_eq!(derive_fill_percent(-500.0, 20_000), 0);
    }

    #[test]
    fn test_fill_percent_zero_capacity_guard() {
        assert_eq!(derive_fill_percent(4000.0, 0), 0);
        assert_eq!(derive_fill_percent(4000.0, -1), 0);
    }

    #[test]
    fn test_fill_percent_monotonic_in_raw_level() {
        let mut previous = 0;
        for step in 0..200 {
            let percent = derive_fill_percent(step as f64 * 150.0, 20_000);
            assert!(percent >= previous);
            previous = percent;
        }
    }

    #[test]
    fn test_level_band_boundaries() {
        assert_eq!(classify_level(0), LevelBand::Low);
        assert_eq!(classify_level(19), LevelBand::Low);
        assert_eq!(classify_level(20), LevelBand::Medium);
        assert_eq!(classify_level(49), LevelBand::Medium);
        assert_eq!(classify_level(50), LevelBand::Good);
        assert_eq!(classify_level(100), LevelBand::Good);
    }

    #[test]
    fn test_temperature_band_boundaries() {
        assert_eq!(classify_temperature(9.9), TempBand::Cold);
        assert_eq!(classify_temperature(10.0), TempBand::Normal);
        assert_eq!(classify_temperature(30.0), TempBand::Normal);
        assert_eq!(classify_temperature(30.1), TempBand::Hot);
        assert_eq!(classify_temperature(-5.0), TempBand::Cold);
    }

    #[test]
    fn test_aggregate_sums_exactly() {
        let readings = vec![
            reading(20_000, 4000.0),
            reading(10_000, 2500.0),
            reading(5000, 0.0),
        ];
        let totals = aggregate(&readings);
        assert_eq!(totals.total_capacity, 35_000);
        assert_eq!(totals.total_utilized_volume, 6500.0);
        // 6500 / 35000 * 100 = 18.571... -> 18.6
        assert_eq!(totals.utilization_rate_percent, 18.6);
    }

    #[test]
    fn test_aggregate_can_exceed_one_hundred_percent() {
        // fillPercent is clamped per tank, but utilization reports the raw
        // overfill
        let readings = vec![reading(1000, 1500.0)];
        let totals = aggregate(&readings);
        assert_eq!(totals.total_utilized_volume, 1500.0);
        assert_eq!(totals.utilization_rate_percent, 150.0);
    }

    #[test]
    fn test_aggregate_empty_fleet() {
        let totals = aggregate(&[]);
        assert_eq!(totals.total_capacity, 0);
        assert_eq!(totals.total_utilized_volume, 0.0);
        assert_eq!(totals.utilization_rate_percent, 0.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(18.571), 18.6);
        assert_eq!(round1(20.0), 20.0);
        assert_eq!(round1(99.94), 99.9);
        assert_eq!(round1(99.95), 100.0);
    }
}
