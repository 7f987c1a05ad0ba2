use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{DynAPI, API},
    entities::{Coordinates, DeclaredRoute, Driver, Itinerary, ItineraryDraft, Passenger, Travel, User},
    error::Error,
    fare::{FareEstimate, FareRequest},
    matching::{BestMatch, MatchScore},
};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let app = router(Arc::new(api) as DynAPI);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/users", get(list_users))
        .route("/drivers", post(register_driver))
        .route("/passengers", post(register_passenger))
        .route(
            "/users/:username/location",
            get(find_location).put(update_location),
        )
        .route("/drivers/:username/rating", put(update_rating))
        .route(
            "/drivers/:username/routes",
            get(find_routes).put(replace_routes),
        )
        .route(
            "/passengers/:username/travel",
            get(find_travel).put(update_travel),
        )
        .route(
            "/passengers/:username/itineraries",
            get(find_itineraries).post(save_itineraries),
        )
        .route("/passengers/:username/best_driver", get(best_driver))
        .route("/drivers/:username/top_customers/:n", get(top_customers))
        .route("/fares/calculate", post(calculate_fare))
        // Legacy alias kept for clients of the pre-v1 surface.
        .route("/cost", post(calculate_fare))
        .layer(Extension(api))
}

async fn root() -> &'static str {
    "Ride and Go matching service"
}

#[derive(Serialize, Deserialize)]
struct RegisterParams {
    username: String,
}

#[derive(Serialize, Deserialize)]
struct LocationParams {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize)]
struct RatingParams {
    rating: f64,
}

#[derive(Serialize, Deserialize)]
struct RoutesParams {
    routes: Vec<DeclaredRoute>,
}

#[derive(Serialize, Deserialize)]
struct ItinerariesParams {
    itineraries: Vec<ItineraryDraft>,
}

async fn list_users(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<User>>, Error> {
    let users = api.list_users().await?;

    Ok(users.into())
}

async fn register_driver(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RegisterParams>,
) -> Result<Json<Driver>, Error> {
    let driver = api.register_driver(params.username).await?;

    Ok(driver.into())
}

async fn register_passenger(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RegisterParams>,
) -> Result<Json<Passenger>, Error> {
    let passenger = api.register_passenger(params.username).await?;

    Ok(passenger.into())
}

async fn find_location(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Coordinates>, Error> {
    let location = api.find_location(&username).await?;

    Ok(location.into())
}

async fn update_location(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
    Json(params): Json<LocationParams>,
) -> Result<Json<Coordinates>, Error> {
    let coordinates = Coordinates::new(params.latitude, params.longitude)?;
    api.update_location(&username, coordinates).await?;

    Ok(coordinates.into())
}

async fn update_rating(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
    Json(params): Json<RatingParams>,
) -> Result<Json<Driver>, Error> {
    let driver = api.update_rating(&username, params.rating).await?;

    Ok(driver.into())
}

async fn find_routes(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Vec<DeclaredRoute>>, Error> {
    let routes = api.find_routes(&username).await?;

    Ok(routes.into())
}

async fn replace_routes(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
    Json(params): Json<RoutesParams>,
) -> Result<Json<Driver>, Error> {
    let driver = api.replace_routes(&username, params.routes).await?;

    Ok(driver.into())
}

async fn find_travel(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Travel>, Error> {
    let travel = api.find_travel(&username).await?;

    Ok(travel.into())
}

async fn update_travel(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
    Json(travel): Json<Travel>,
) -> Result<Json<Passenger>, Error> {
    let passenger = api.update_travel(&username, travel).await?;

    Ok(passenger.into())
}

async fn find_itineraries(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Itinerary>>, Error> {
    let itineraries = api.find_itineraries(&username).await?;

    Ok(itineraries.into())
}

async fn save_itineraries(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
    Json(params): Json<ItinerariesParams>,
) -> Result<Json<Vec<Itinerary>>, Error> {
    let itineraries = api.save_itineraries(&username, params.itineraries).await?;

    Ok(itineraries.into())
}

async fn best_driver(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Option<BestMatch>>, Error> {
    let best = api.best_driver(&username).await?;

    Ok(best.into())
}

async fn top_customers(
    Extension(api): Extension<DynAPI>,
    Path((username, n)): Path<(String, i64)>,
) -> Result<Json<Vec<MatchScore>>, Error> {
    let top = api.top_customers(&username, n).await?;

    Ok(top.into())
}

async fn calculate_fare(
    Extension(api): Extension<DynAPI>,
    Json(request): Json<FareRequest>,
) -> Result<Json<FareEstimate>, Error> {
    let estimate = api.estimate_fare(request).await?;

    Ok(estimate.into())
}
