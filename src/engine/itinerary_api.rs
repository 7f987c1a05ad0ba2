use super::Engine;

use async_trait::async_trait;

use crate::{
    api::ItineraryAPI,
    entities::{Itinerary, ItineraryDraft},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl ItineraryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_itineraries(&self, username: &str) -> Result<Vec<Itinerary>, Error> {
        self.store
            .passenger(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        Ok(self.store.itineraries(username).await)
    }

    #[tracing::instrument(skip(self))]
    async fn save_itineraries(
        &self,
        username: &str,
        drafts: Vec<ItineraryDraft>,
    ) -> Result<Vec<Itinerary>, Error> {
        self.store
            .passenger(username)
            .await
            .ok_or_else(|| invalid_input_error())?;

        for draft in &drafts {
            if draft.start_location_name.trim().is_empty()
                || draft.end_location_name.trim().is_empty()
            {
                return Err(invalid_input_error());
            }
        }

        let itineraries: Vec<_> = drafts.into_iter().map(Itinerary::new).collect();
        self.store
            .save_itineraries(username, itineraries.clone())
            .await;

        Ok(itineraries)
    }
}
