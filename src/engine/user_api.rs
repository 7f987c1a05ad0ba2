use super::Engine;

use async_trait::async_trait;

use crate::{
    api::UserAPI,
    entities::{Coordinates, DeclaredRoute, Driver, Passenger, Travel, User},
    error::{invalid_input_error, missing_location_error, Error},
};

#[async_trait]
impl UserAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn register_driver(&self, username: String) -> Result<Driver, Error> {
        if username.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let driver = Driver::new(username);
        self.store.insert_driver(driver.clone()).await?;

        Ok(driver)
    }

    #[tracing::instrument(skip(self))]
    async fn register_passenger(&self, username: String) -> Result<Passenger, Error> {
        if username.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let passenger = Passenger::new(username);
        self.store.insert_passenger(passenger.clone()).await?;

        Ok(passenger)
    }

    #[tracing::instrument(skip(self))]
    async fn update_location(
        &self,
        username: &str,
        coordinates: Coordinates,
    ) -> Result<(), Error> {
        coordinates.validate()?;

        if let Some(mut driver) = self.store.driver(username).await {
            driver.set_location(coordinates);
            self.store.save_driver(driver).await;
            return Ok(());
        }

        if let Some(mut passenger) = self.store.passenger(username).await {
            passenger.set_location(coordinates);
            self.store.save_passenger(passenger).await;
            return Ok(());
        }

        Err(invalid_input_error())
    }

    #[tracing::instrument(skip(self))]
    async fn find_location(&self, username: &str) -> Result<Coordinates, Error> {
        let location = match self.store.driver(username).await {
            Some(driver) => driver.location,
            None => self
                .store
                .passenger(username)
                .await
                .ok_or_else(|| invalid_input_error())?
                .location,
        };

        location.ok_or_else(|| missing_location_error())
    }

    #[tracing::instrument(skip(self))]
    async fn update_rating(&self, username: &str, rating: f64) -> Result<Driver, Error> {
        let mut driver = self
            .store
            .driver(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        driver.set_rating(rating)?;
        self.store.save_driver(driver.clone()).await;

        Ok(driver)
    }

    #[tracing::instrument(skip(self))]
    async fn replace_routes(
        &self,
        username: &str,
        routes: Vec<DeclaredRoute>,
    ) -> Result<Driver, Error> {
        let mut driver = self
            .store
            .driver(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        driver.replace_routes(routes)?;
        self.store.save_driver(driver.clone()).await;

        Ok(driver)
    }

    #[tracing::instrument(skip(self))]
    async fn find_routes(&self, username: &str) -> Result<Vec<DeclaredRoute>, Error> {
        let driver = self
            .store
            .driver(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        Ok(driver.routes)
    }

    #[tracing::instrument(skip(self))]
    async fn update_travel(&self, username: &str, travel: Travel) -> Result<Passenger, Error> {
        let mut passenger = self
            .store
            .passenger(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        passenger.set_travel(travel)?;
        self.store.save_passenger(passenger.clone()).await;

        Ok(passenger)
    }

    #[tracing::instrument(skip(self))]
    async fn find_travel(&self, username: &str) -> Result<Travel, Error> {
        let passenger = self
            .store
            .passenger(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        Ok(passenger.travel)
    }

    #[tracing::instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.store.list_users().await)
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::block_on;

    use crate::api::UserAPI;
    use crate::engine::test_support::test_engine;
    use crate::entities::{Coordinates, DeclaredRoute, RoutePoint, Travel};
    use crate::error::{duplicate_user_error, missing_location_error};

    #[test]
    fn registration_rejects_taken_usernames() {
        let engine = test_engine(&[]);

        block_on(engine.register_driver("johndoe".into())).unwrap();

        let err = block_on(engine.register_passenger("johndoe".into())).unwrap_err();
        assert_eq!(err.code, duplicate_user_error().code);
    }

    #[test]
    fn location_roundtrip_for_both_roles() {
        let engine = test_engine(&[]);

        block_on(engine.register_driver("bob".into())).unwrap();
        block_on(engine.register_passenger("alice".into())).unwrap();

        let err = block_on(engine.find_location("bob")).unwrap_err();
        assert_eq!(err.code, missing_location_error().code);

        let point = Coordinates::new(3.848, 11.502).unwrap();
        block_on(engine.update_location("bob", point)).unwrap();
        block_on(engine.update_location("alice", point)).unwrap();

        assert_eq!(block_on(engine.find_location("bob")).unwrap(), point);
        assert_eq!(block_on(engine.find_location("alice")).unwrap(), point);
    }

    #[test]
    fn unknown_user_cannot_report_location() {
        let engine = test_engine(&[]);

        let point = Coordinates::new(3.848, 11.502).unwrap();
        assert!(block_on(engine.update_location("nobody", point)).is_err());
    }

    #[test]
    fn routes_are_replaced_wholesale() {
        let engine = test_engine(&[]);

        block_on(engine.register_driver("bob".into())).unwrap();

        let route = DeclaredRoute {
            start: RoutePoint {
                name: "Carrefour Warda".into(),
                coordinates: None,
            },
            end: RoutePoint {
                name: "Mvog-Mbi".into(),
                coordinates: None,
            },
        };

        block_on(engine.replace_routes("bob", vec![route.clone(), route.clone()])).unwrap();
        assert_eq!(block_on(engine.find_routes("bob")).unwrap().len(), 2);

        block_on(engine.replace_routes("bob", vec![route])).unwrap();
        assert_eq!(block_on(engine.find_routes("bob")).unwrap().len(), 1);
    }

    #[test]
    fn travel_updates_apply_to_passengers_only() {
        let engine = test_engine(&[]);

        block_on(engine.register_driver("bob".into())).unwrap();
        block_on(engine.register_passenger("alice".into())).unwrap();

        let travel = Travel {
            origin: Some(Coordinates::new(3.866, 11.516).unwrap()),
            destination: Some(Coordinates::new(3.848, 11.502).unwrap()),
        };

        block_on(engine.update_travel("alice", travel)).unwrap();
        assert!(block_on(engine.find_travel("alice"))
            .unwrap()
            .origin
            .is_some());

        assert!(block_on(engine.update_travel("bob", travel)).is_err());
    }

    #[test]
    fn list_users_tags_roles() {
        let engine = test_engine(&[]);

        block_on(engine.register_driver("bob".into())).unwrap();
        block_on(engine.register_passenger("alice".into())).unwrap();

        let users = block_on(engine.list_users()).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username(), "alice");
        assert_eq!(users[1].username(), "bob");
    }
}
