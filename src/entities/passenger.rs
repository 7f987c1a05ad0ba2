use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::Error;

/// A passenger's desired trip; both ends stay unset until reported.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Travel {
    pub origin: Option<Coordinates>,
    pub destination: Option<Coordinates>,
}

impl Travel {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(origin) = &self.origin {
            origin.validate()?;
        }
        if let Some(destination) = &self.destination {
            destination.validate()?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Passenger {
    pub username: String,
    pub location: Option<Coordinates>,
    pub travel: Travel,
}

impl Passenger {
    /// A freshly registered passenger with an empty travel itinerary.
    pub fn new(username: String) -> Self {
        Self {
            username,
            location: None,
            travel: Travel::default(),
        }
    }

    pub fn set_location(&mut self, coordinates: Coordinates) {
        self.location = Some(coordinates);
    }

    /// Replaces the travel itinerary wholesale.
    pub fn set_travel(&mut self, travel: Travel) -> Result<(), Error> {
        travel.validate()?;
        self.travel = travel;

        Ok(())
    }
}
