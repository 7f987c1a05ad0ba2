//! Fare-estimation support: departure-time bucketing and the feature vector
//! handed to the (opaque) fare predictor.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::{invalid_time_format_error, Error};

/// Fixed minimum fare quoted alongside every estimate (FCFA).
pub const MINIMUM_FARE: i64 = 350;

/// Maps a `HH:MM` time of day to one of 8 fixed slots.
///
/// The slots partition the full day; the odd boundary between slots 7 and 8
/// falls at 21:00 inclusive.
pub fn time_slot(hour: &str) -> Result<u8, Error> {
    let time =
        NaiveTime::parse_from_str(hour, "%H:%M").map_err(|_| invalid_time_format_error())?;

    let minutes = time.hour() * 60 + time.minute();

    let slot = match minutes {
        0..=299 => 1,     // 00:00-04:59
        300..=419 => 2,   // 05:00-06:59
        420..=539 => 3,   // 07:00-08:59
        540..=839 => 4,   // 09:00-13:59
        840..=929 => 5,   // 14:00-15:29
        930..=1139 => 6,  // 15:30-18:59
        1140..=1260 => 7, // 19:00-21:00
        _ => 8,           // 21:01-23:59
    };

    Ok(slot)
}

/// The feature vector the fare model was trained on:
/// `[origin_lon, origin_lat, dest_lon, dest_lat, distance_km, time_slot]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FareFeatures {
    pub origin_longitude: f64,
    pub origin_latitude: f64,
    pub destination_longitude: f64,
    pub destination_latitude: f64,
    pub distance_km: f64,
    pub time_slot: u8,
}

impl FareFeatures {
    pub fn new(origin: Coordinates, destination: Coordinates, hour: &str) -> Result<Self, Error> {
        Ok(Self {
            origin_longitude: origin.longitude,
            origin_latitude: origin.latitude,
            destination_longitude: destination.longitude,
            destination_latitude: destination.latitude,
            distance_km: origin.distance_km(&destination),
            time_slot: time_slot(hour)?,
        })
    }
}

/// Opaque fare model: feature vector in, predicted price out.
pub trait FarePredictor: Send + Sync {
    fn predict(&self, features: &FareFeatures) -> f64;
}

/// Deterministic distance-and-slot baseline used when no trained model is
/// wired in.
#[derive(Debug, Default)]
pub struct BaselineFarePredictor;

impl FarePredictor for BaselineFarePredictor {
    fn predict(&self, features: &FareFeatures) -> f64 {
        let multiplier = match features.time_slot {
            3 | 6 => 1.25, // commute peaks
            7 | 8 => 1.15, // evening
            _ => 1.0,
        };

        (MINIMUM_FARE as f64 + 150.0 * features.distance_km) * multiplier
    }
}

/// Fare calculation request as received over the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    pub start_location_name: String,
    pub end_location_name: String,
    pub departure_time: Option<String>,
}

/// Fare estimate returned to the client.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareEstimate {
    pub estimated_fare: i64,
    pub minimum_fare: i64,
    pub distance_in_km: f64,
    pub start_location_name: String,
    pub end_location_name: String,
}
