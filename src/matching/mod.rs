//! Relevance scoring and top-N matching between passengers and drivers.
//!
//! The composite score blends three independently normalized signals:
//! geographic proximity, driver rating and route concordance. Scoring is a
//! pure function of its two records; nothing here touches storage.

mod selection;

pub use selection::{select_best_driver, top_customers};

use serde::Serialize;

use crate::entities::{DeclaredRoute, Driver, Passenger, Travel};
use crate::error::{missing_location_error, Error};

/// Weight of the proximity signal.
pub const W_PROXIMITY: f64 = 0.3;
/// Weight of the driver rating signal.
pub const W_RATING: f64 = 0.2;
/// Weight of the route concordance signal.
pub const W_CONCORDANCE: f64 = 0.5;

/// A declared route endpoint counts as serving a travel endpoint when it lies
/// within this many kilometers of it.
pub const CONCORDANCE_RADIUS_KM: f64 = 2.0;

/// Ephemeral scoring result, computed fresh per request and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchScore {
    pub username: String,
    pub score: f64,
}

/// Best-match result: the winning driver together with its score.
#[derive(Clone, Debug, Serialize)]
pub struct BestMatch {
    pub driver: Driver,
    pub score: f64,
}

/// Composite relevance score for a passenger/driver pair.
///
/// Requires the passenger's travel origin and the driver's position; fails
/// otherwise. The proximity signal is `1 / (1 + d)` over the haversine
/// distance `d`, the rating is used as-is, and the concordance signal is a
/// deterministic 0/1 check of the driver's declared routes against the
/// passenger's itinerary.
pub fn relevance_score(passenger: &Passenger, driver: &Driver) -> Result<f64, Error> {
    let origin = passenger
        .travel
        .origin
        .ok_or_else(|| missing_location_error())?;
    let position = driver.location.ok_or_else(|| missing_location_error())?;

    let distance = origin.distance_km(&position);
    let proximity = 1.0 / (1.0 + distance);

    let concordance = if routes_concord(&driver.routes, &passenger.travel) {
        1.0
    } else {
        0.0
    };

    Ok(W_PROXIMITY * proximity + W_RATING * driver.rating + W_CONCORDANCE * concordance)
}

/// True when some declared route has both endpoints geocoded and within
/// [`CONCORDANCE_RADIUS_KM`] of the passenger's origin and destination.
/// Routes without coordinates, or an itinerary without a destination, never
/// concord.
fn routes_concord(routes: &[DeclaredRoute], travel: &Travel) -> bool {
    let (origin, destination) = match (travel.origin, travel.destination) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => return false,
    };

    routes.iter().any(|route| {
        match (route.start.coordinates, route.end.coordinates) {
            (Some(start), Some(end)) => {
                start.distance_km(&origin) <= CONCORDANCE_RADIUS_KM
                    && end.distance_km(&destination) <= CONCORDANCE_RADIUS_KM
            }
            _ => false,
        }
    })
}
