use super::Engine;

use async_trait::async_trait;
use chrono::Local;

use crate::{
    api::FareAPI,
    error::Error,
    fare::{FareEstimate, FareFeatures, FareRequest, MINIMUM_FARE},
};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_fare(&self, request: FareRequest) -> Result<FareEstimate, Error> {
        let origin = self.geocoder.locate(&request.start_location_name).await?;
        let destination = self.geocoder.locate(&request.end_location_name).await?;

        let departure = match &request.departure_time {
            Some(hour) => hour.clone(),
            None => Local::now().format("%H:%M").to_string(),
        };

        let features = FareFeatures::new(origin, destination, &departure)?;
        let fare = self.predictor.predict(&features);

        Ok(FareEstimate {
            estimated_fare: fare.round() as i64,
            minimum_fare: MINIMUM_FARE,
            distance_in_km: (features.distance_km * 100.0).round() / 100.0,
            start_location_name: request.start_location_name,
            end_location_name: request.end_location_name,
        })
    }
}
