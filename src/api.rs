use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Coordinates, DeclaredRoute, Driver, Itinerary, ItineraryDraft, Passenger, Travel, User,
};
use crate::error::Error;
use crate::fare::{FareEstimate, FareRequest};
use crate::matching::{BestMatch, MatchScore};

#[async_trait]
pub trait UserAPI {
    async fn register_driver(&self, username: String) -> Result<Driver, Error>;
    async fn register_passenger(&self, username: String) -> Result<Passenger, Error>;
    async fn update_location(&self, username: &str, coordinates: Coordinates)
        -> Result<(), Error>;
    async fn find_location(&self, username: &str) -> Result<Coordinates, Error>;
    async fn update_rating(&self, username: &str, rating: f64) -> Result<Driver, Error>;
    async fn replace_routes(
        &self,
        username: &str,
        routes: Vec<DeclaredRoute>,
    ) -> Result<Driver, Error>;
    async fn find_routes(&self, username: &str) -> Result<Vec<DeclaredRoute>, Error>;
    async fn update_travel(&self, username: &str, travel: Travel) -> Result<Passenger, Error>;
    async fn find_travel(&self, username: &str) -> Result<Travel, Error>;
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}

#[async_trait]
pub trait MatchingAPI {
    /// Best driver for a passenger, or `None` when no candidate can be scored.
    async fn best_driver(&self, passenger_username: &str) -> Result<Option<BestMatch>, Error>;

    /// The driver's `n` highest-scoring passengers, best first.
    async fn top_customers(
        &self,
        driver_username: &str,
        n: i64,
    ) -> Result<Vec<MatchScore>, Error>;
}

#[async_trait]
pub trait FareAPI {
    async fn estimate_fare(&self, request: FareRequest) -> Result<FareEstimate, Error>;
}

#[async_trait]
pub trait ItineraryAPI {
    async fn find_itineraries(&self, username: &str) -> Result<Vec<Itinerary>, Error>;
    async fn save_itineraries(
        &self,
        username: &str,
        drafts: Vec<ItineraryDraft>,
    ) -> Result<Vec<Itinerary>, Error>;
}

pub trait API: UserAPI + MatchingAPI + FareAPI + ItineraryAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
