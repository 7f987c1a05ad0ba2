use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

/// One endpoint of a declared route: a place name, optionally geocoded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePoint {
    pub name: String,
    pub coordinates: Option<Coordinates>,
}

/// A route a driver offers to serve, as a start/end pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeclaredRoute {
    pub start: RoutePoint,
    pub end: RoutePoint,
}

impl DeclaredRoute {
    pub fn validate(&self) -> Result<(), Error> {
        if self.start.name.trim().is_empty() || self.end.name.trim().is_empty() {
            return Err(invalid_input_error());
        }

        if let Some(coordinates) = &self.start.coordinates {
            coordinates.validate()?;
        }
        if let Some(coordinates) = &self.end.coordinates {
            coordinates.validate()?;
        }

        Ok(())
    }
}
