use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// Mean Earth radius in kilometers, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;

        Ok(coordinates)
    }

    /// Bounds check for values that arrived through deserialization.
    pub fn validate(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid_input_error());
        }

        Ok(())
    }

    /// Haversine great-circle distance to another point, in kilometers.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let (lat1, lon1) = (self.latitude.to_radians(), self.longitude.to_radians());
        let (lat2, lon2) = (other.latitude.to_radians(), other.longitude.to_radians());

        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}
