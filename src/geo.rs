//! Geographic placement of stations.
//!
//! The service region is a square of a given side length anchored at the
//! origin of a local coordinate frame. Stations are placed by drawing a
//! uniformly random point inside the region. The flat-earth approximation is
//! fine at city scale, which is the only scale this system models.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Kilometers covered by one degree of latitude (and of longitude at the
/// equator-anchored local frame used here).
const KM_PER_DEGREE: f64 = 111.2;

/// A GPS position expressed as offsets from the region origin, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GpsLocation { latitude, longitude }
    }
}

/// Square service region used to bound random station placement.
#[derive(Debug, Clone, Copy)]
pub struct GeoArea {
    max_latitude: f64,
    max_longitude: f64,
}

impl GeoArea {
    /// Compute the bounding extent for a square region of `side_km` per side.
    pub fn new(side_km: f64) -> Self {
        GeoArea {
            max_latitude: side_km / KM_PER_DEGREE,
            max_longitude: side_km / KM_PER_DEGREE,
        }
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// Draw a uniformly random location inside the region.
    pub fn random_location(&self, rng: &mut impl Rng) -> GpsLocation {
        GpsLocation {
            latitude: rng.gen::<f64>() * self.max_latitude,
            longitude: rng.gen::<f64>() * self.max_longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_extent_scales_with_side_length() {
        let small = GeoArea::new(1.0);
        let large = GeoArea::new(10.0);
        assert!(large.max_latitude() > small.max_latitude());
        assert!((large.max_latitude() / small.max_latitude() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_location_stays_inside_region() {
        let area = GeoArea::new(5.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let loc = area.random_location(&mut rng);
            assert!(loc.latitude >= 0.0 && loc.latitude <= area.max_latitude());
            assert!(loc.longitude >= 0.0 && loc.longitude <= area.max_longitude());
        }
    }
}
