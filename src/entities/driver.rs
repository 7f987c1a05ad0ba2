use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, DeclaredRoute};
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub username: String,
    pub location: Option<Coordinates>,
    pub rating: f64,
    pub routes: Vec<DeclaredRoute>,
}

impl Driver {
    /// A freshly registered driver: no position reported yet, rating 0, no routes.
    pub fn new(username: String) -> Self {
        Self {
            username,
            location: None,
            rating: 0.0,
            routes: Vec::new(),
        }
    }

    pub fn set_location(&mut self, coordinates: Coordinates) {
        self.location = Some(coordinates);
    }

    /// Ratings live on a 0-5 scale; anything else is rejected at the boundary.
    pub fn set_rating(&mut self, rating: f64) -> Result<(), Error> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(invalid_input_error());
        }

        self.rating = rating;

        Ok(())
    }

    /// Replaces the declared routes wholesale.
    pub fn replace_routes(&mut self, routes: Vec<DeclaredRoute>) -> Result<(), Error> {
        for route in &routes {
            route.validate()?;
        }

        self.routes = routes;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RoutePoint;

    #[test]
    fn new_driver_has_no_location_and_zero_rating() {
        let driver = Driver::new("johndoe".into());

        assert!(driver.location.is_none());
        assert_eq!(driver.rating, 0.0);
        assert!(driver.routes.is_empty());
    }

    #[test]
    fn rating_outside_scale_is_rejected() {
        let mut driver = Driver::new("johndoe".into());

        assert!(driver.set_rating(5.5).is_err());
        assert!(driver.set_rating(-0.1).is_err());
        assert!(driver.set_rating(4.5).is_ok());
        assert_eq!(driver.rating, 4.5);
    }

    #[test]
    fn replace_routes_is_wholesale() {
        let mut driver = Driver::new("johndoe".into());

        let route = |start: &str, end: &str| DeclaredRoute {
            start: RoutePoint {
                name: start.into(),
                coordinates: None,
            },
            end: RoutePoint {
                name: end.into(),
                coordinates: None,
            },
        };

        driver
            .replace_routes(vec![route("Warda", "Mvog-Mbi"), route("Warda", "Poste")])
            .unwrap();
        assert_eq!(driver.routes.len(), 2);

        driver.replace_routes(vec![route("Ngoa", "Poste")]).unwrap();
        assert_eq!(driver.routes.len(), 1);
        assert_eq!(driver.routes[0].start.name, "Ngoa");
    }
}
