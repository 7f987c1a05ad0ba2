mod fare_api;
mod itinerary_api;
mod matching_api;
mod user_api;

use crate::api::API;
use crate::external::Geocoder;
use crate::fare::FarePredictor;
use crate::store::Store;

pub struct Engine {
    store: Store,
    geocoder: Box<dyn Geocoder>,
    predictor: Box<dyn FarePredictor>,
}

impl Engine {
    pub fn new(store: Store, geocoder: Box<dyn Geocoder>, predictor: Box<dyn FarePredictor>) -> Self {
        Self {
            store,
            geocoder,
            predictor,
        }
    }
}

impl API for Engine {}
