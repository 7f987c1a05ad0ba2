use super::Engine;

use async_trait::async_trait;

use crate::{
    api::MatchingAPI,
    error::{driver_not_found_error, invalid_argument_error, invalid_input_error, Error},
    matching::{self, BestMatch, MatchScore},
};

#[async_trait]
impl MatchingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn best_driver(&self, passenger_username: &str) -> Result<Option<BestMatch>, Error> {
        let passenger = self
            .store
            .passenger(passenger_username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        let drivers = self.store.list_drivers().await;

        Ok(
            matching::select_best_driver(&passenger, &drivers).map(|(driver, score)| BestMatch {
                driver: driver.clone(),
                score,
            }),
        )
    }

    #[tracing::instrument(skip(self))]
    async fn top_customers(
        &self,
        driver_username: &str,
        n: i64,
    ) -> Result<Vec<MatchScore>, Error> {
        if n < 0 {
            return Err(invalid_argument_error());
        }

        let driver = self
            .store
            .driver(driver_username)
            .await
            .ok_or_else(|| driver_not_found_error())?;

        let passengers = self.store.list_passengers().await;

        Ok(matching::top_customers(&driver, &passengers, n as usize))
    }
}
