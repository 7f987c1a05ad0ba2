use rideandgo::engine::Engine;
use rideandgo::external::Nominatim;
use rideandgo::fare::BaselineFarePredictor;
use rideandgo::server::serve;
use rideandgo::store::Store;

#[tokio::main]
async fn main() {
    let store = Store::default();
    let geocoder = Nominatim::new("Yaoundé", "Cameroon");

    let engine = Engine::new(
        store,
        Box::new(geocoder),
        Box::new(BaselineFarePredictor::default()),
    );

    serve(engine).await;
}
