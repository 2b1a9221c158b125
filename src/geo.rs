const EARTH_RADIUS_KM: f64 = 6371.0;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// A position in decimal degrees, south and west negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

/// Bearing (degrees, magnetic variation applied) and range (nautical miles)
/// from a reference point, both rounded to 2 decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BearingRange {
    pub bearing: f64,
    pub range: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    /// Great-circle bearing and range from `self` to `target` on a spherical
    /// Earth. The variation is added after the true bearing is folded into
    /// [0, 360) and the sum is not folded again, so the result may leave that
    /// range.
    pub fn bearing_and_range(self, target: LatLon, magnetic_variation: f64) -> BearingRange {
        let (from_lat, from_lon) = (self.0.to_radians(), self.1.to_radians());
        let (to_lat, to_lon) = (target.0.to_radians(), target.1.to_radians());

        let d_lat = to_lat - from_lat;
        let d_lon = to_lon - from_lon;

        // Haversine. Near antipodes `a` can round past 1.
        let a = ((d_lat / 2.0).sin().powi(2)
            + from_lat.cos() * to_lat.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
        let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        let range = EARTH_RADIUS_KM * central_angle / KM_PER_NAUTICAL_MILE;

        // Forward azimuth
        let y = d_lon.sin() * to_lat.cos();
        let x = from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lon.cos();
        let true_bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;

        BearingRange {
            bearing: round2(true_bearing + magnetic_variation),
            range: round2(range),
        }
    }
}

/// Flat form of [`LatLon::bearing_and_range`], returning `(bearing, range_nm)`.
pub fn bearing_and_range(
    bullseye_lat: f64,
    bullseye_lon: f64,
    target_lat: f64,
    target_lon: f64,
    magnetic_variation: f64,
) -> (f64, f64) {
    let result = LatLon::new(bullseye_lat, bullseye_lon)
        .bearing_and_range(LatLon::new(target_lat, target_lon), magnetic_variation);
    (result.bearing, result.range)
}

/// Parses a decimal-degree token. Surrounding whitespace is ignored and
/// non-finite values are rejected.
pub fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

// Half away from zero on the binary value, not ties-to-even on the decimal.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn same_point_is_zero() {
        let p = LatLon::new(29.9844, -95.3414);
        let result = p.bearing_and_range(p, 0.0);
        assert_eq!(result.bearing, 0.0);
        assert_eq!(result.range, 0.0);
    }

    #[test]
    fn one_degree_east_on_equator() {
        let (bearing, range) = bearing_and_range(0.0, 0.0, 0.0, 1.0, 0.0);
        assert!(close(bearing, 90.0), "bearing was {}", bearing);
        assert!(close(range, 60.04), "range was {}", range);
    }

    #[test]
    fn one_degree_north_on_meridian() {
        let (bearing, range) = bearing_and_range(0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(close(bearing, 0.0), "bearing was {}", bearing);
        assert!(close(range, 60.04), "range was {}", range);
    }

    #[test]
    fn west_and_south_are_folded_positive() {
        let (west, _) = bearing_and_range(0.0, 0.0, 0.0, -1.0, 0.0);
        let (south, _) = bearing_and_range(0.0, 0.0, -1.0, 0.0, 0.0);
        assert!(close(west, 270.0), "west was {}", west);
        assert!(close(south, 180.0), "south was {}", south);
    }

    #[test]
    fn variation_is_added_without_refolding() {
        let (bearing, _) = bearing_and_range(0.0, 0.0, 0.0, -1.0, 100.0);
        assert!(close(bearing, 370.0), "bearing was {}", bearing);

        let (bearing, _) = bearing_and_range(0.0, 0.0, 0.0, 1.0, -100.0);
        assert!(close(bearing, -10.0), "bearing was {}", bearing);
    }

    #[test]
    fn variation_past_north_exceeds_360() {
        // Roughly 350 degrees true from the bullseye
        let bullseye = LatLon::new(0.0, 0.0);
        let target = LatLon::new(1.0, -0.1763);
        let uncorrected = bullseye.bearing_and_range(target, 0.0);
        let corrected = bullseye.bearing_and_range(target, 20.0);
        assert!(uncorrected.bearing > 349.0 && uncorrected.bearing < 351.0);
        assert!(corrected.bearing > 360.0);
        assert!((corrected.bearing - uncorrected.bearing - 20.0).abs() < 0.011);
        assert_eq!(corrected.range, uncorrected.range);
    }

    #[test]
    fn antipode_is_half_circumference() {
        let (_, range) = bearing_and_range(45.0, 0.0, -45.0, 180.0, 0.0);
        assert!(range.is_finite());
        assert!((range - 10807.28).abs() < 0.011, "range was {}", range);
    }

    #[test]
    fn antipodes_never_give_nan() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let anti_lon = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
                let (bearing, range) = bearing_and_range(lat, lon, -lat, anti_lon, 0.0);
                assert!(bearing.is_finite() && range.is_finite(), "({}, {})", lat, lon);
                lon += 1.0;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = bearing_and_range(29.9844, -95.3414, 30.5, -94.1, -3.5);
        for _ in 0..10 {
            assert_eq!(bearing_and_range(29.9844, -95.3414, 30.5, -94.1, -3.5), first);
        }
    }

    #[test]
    fn results_have_two_decimals() {
        let (bearing, range) = bearing_and_range(29.9844, -95.3414, 31.2, -97.05, 2.0);
        assert!(close(bearing * 100.0, (bearing * 100.0).round()));
        assert!(close(range * 100.0, (range * 100.0).round()));
    }

    #[test]
    fn decimal_tokens() {
        assert_eq!(parse_degrees(" -95.25\n"), Some(-95.25));
        assert_eq!(parse_degrees("29"), Some(29.0));
        assert_eq!(parse_degrees(""), None);
        assert_eq!(parse_degrees("N29.5"), None);
        assert_eq!(parse_degrees("NaN"), None);
        assert_eq!(parse_degrees("inf"), None);
    }
}
