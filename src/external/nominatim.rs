use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::Coordinates;
use crate::error::{geocoding_error, upstream_error, Error};

use super::Geocoder;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "rideandgo/0.1 (matching service)";

/// Nominatim returns coordinates as strings.
#[derive(Clone, Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// OpenStreetMap Nominatim client. Bare neighborhood names are qualified with
/// the configured city and country before searching.
#[derive(Clone, Debug)]
pub struct Nominatim {
    city: String,
    country: String,
}

impl Nominatim {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    #[tracing::instrument(skip(self))]
    async fn locate(&self, place: &str) -> Result<Coordinates, Error> {
        let address = format!("{}, {}, {}", place, self.city, self.country);

        let res = reqwest::Client::new()
            .get(SEARCH_URL)
            .query(&[("q", address.as_str()), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if res.status().as_u16() != 200 {
            return Err(upstream_error());
        }

        let results: Vec<SearchResult> = res.json().await?;
        let first = results.first().ok_or_else(|| geocoding_error())?;

        let latitude = first.lat.parse().map_err(|_| upstream_error())?;
        let longitude = first.lon.parse().map_err(|_| upstream_error())?;

        Coordinates::new(latitude, longitude)
    }
}
