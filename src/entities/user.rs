use serde::{Deserialize, Serialize};

use crate::entities::{Driver, Passenger};

/// A stored record, tagged by role.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    Driver(Driver),
    Passenger(Passenger),
}

impl User {
    pub fn username(&self) -> &str {
        match self {
            Self::Driver(driver) => &driver.username,
            Self::Passenger(passenger) => &passenger.username,
        }
    }
}
