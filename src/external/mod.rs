mod nominatim;

pub use nominatim::Nominatim;

use async_trait::async_trait;

use crate::entities::Coordinates;
use crate::error::Error;

/// Forward-geocoding collaborator: place name in, coordinates out.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(&self, place: &str) -> Result<Coordinates, Error>;
}
