mod coordinates;
mod driver;
mod itinerary;
mod passenger;
mod route;
mod user;

pub use coordinates::{Coordinates, EARTH_RADIUS_KM};
pub use driver::Driver;
pub use itinerary::{Itinerary, ItineraryDraft};
pub use passenger::{Passenger, Travel};
pub use route::{DeclaredRoute, RoutePoint};
pub use user::User;
