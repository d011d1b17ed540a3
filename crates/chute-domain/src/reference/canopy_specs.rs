//! Canopy wind and size chart

use crate::model::CanopySpec;

const fn chute(
    size: f64,
    max_wind_closed: f64,
    max_wind_open: f64,
    min_weight: f64,
    max_weight: f64,
) -> CanopySpec {
    CanopySpec {
        size,
        max_wind_closed,
        max_wind_open,
        min_weight,
        max_weight,
    }
}

/// Standard canopy envelopes, smallest first.
///
/// Winds in mph, weights in lbs.
pub static CANOPY_SPECS: [CanopySpec; 25] = [
    chute(21.0, 28.0, 29.0, 75.0, 200.0),
    chute(23.0, 28.0, 29.0, 80.0, 250.0),
    chute(25.0, 25.0, 26.0, 80.0, 280.0),
    chute(27.0, 26.0, 26.0, 90.0, 380.0),
    chute(27.5, 26.0, 27.0, 100.0, 380.0),
    chute(29.0, 24.0, 25.0, 90.0, 390.0),
    chute(29.5, 25.0, 26.0, 100.0, 390.0),
    chute(31.0, 23.0, 24.0, 110.0, 400.0),
    chute(31.5, 25.0, 26.0, 120.0, 400.0),
    chute(32.0, 18.0, 19.0, 110.0, 400.0),
    chute(33.0, 20.0, 22.0, 115.0, 450.0),
    chute(33.5, 22.0, 24.0, 125.0, 450.0),
    chute(34.0, 18.0, 19.0, 115.0, 450.0),
    chute(34.5, 20.0, 22.0, 125.0, 450.0),
    chute(35.0, 16.0, 17.0, 115.0, 500.0),
    chute(35.5, 18.0, 20.0, 135.0, 500.0),
    chute(36.0, 15.0, 16.0, 120.0, 500.0),
    chute(37.0, 14.0, 16.0, 120.0, 525.0),
    chute(37.5, 16.0, 18.0, 140.0, 525.0),
    chute(38.0, 12.0, 13.0, 140.0, 525.0),
    chute(39.0, 12.0, 14.0, 150.0, 560.0),
    chute(40.5, 12.0, 14.0, 160.0, 580.0),
    chute(42.0, 12.0, 14.0, 180.0, 600.0),
    chute(46.0, 10.0, 12.0, 200.0, 650.0),
    chute(52.0, 10.0, 11.0, 225.0, 700.0),
];

/// Get canopy spec by size in feet
pub fn get_canopy_spec(size: f64) -> Option<&'static CanopySpec> {
    CANOPY_SPECS.iter().find(|spec| spec.is_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sanity() {
        for spec in CANOPY_SPECS.iter() {
            assert!(spec.min_weight < spec.max_weight, "{} ft", spec.size);
            assert!(spec.max_wind_open >= spec.max_wind_closed, "{} ft", spec.size);
            assert!(spec.validate().is_empty(), "{} ft", spec.size);
        }
    }

    #[test]
    fn test_sizes_are_unique_and_ascending() {
        for pair in CANOPY_SPECS.windows(2) {
            assert!(pair[0].size < pair[1].size);
        }
    }

    #[test]
    fn test_35ft_spec() {
        let spec = get_canopy_spec(35.0).unwrap();
        assert_eq!(spec.max_wind_closed, 16.0);
        assert_eq!(spec.max_wind_open, 17.0);
        assert_eq!(spec.min_weight, 115.0);
        assert_eq!(spec.max_weight, 500.0);
    }

    #[test]
    fn test_fractional_size_lookup() {
        assert!(get_canopy_spec(27.5).is_some());
        assert!(get_canopy_spec(28.0).is_none());
    }
}
