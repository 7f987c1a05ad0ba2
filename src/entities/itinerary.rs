use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Itinerary contents as submitted by a passenger, before an id is assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDraft {
    pub start_location_name: String,
    pub end_location_name: String,
    pub saved_fare: i64,
}

/// A saved passenger itinerary with its remembered fare.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: Uuid,
    pub start_location_name: String,
    pub end_location_name: String,
    pub saved_fare: i64,
}

impl Itinerary {
    pub fn new(draft: ItineraryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_location_name: draft.start_location_name,
            end_location_name: draft.end_location_name,
            saved_fare: draft.saved_fare,
        }
    }
}
