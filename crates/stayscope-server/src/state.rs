use rdkafka::producer::FutureProducer;

use stayscope_storage::store::Store;

/// Shared application state, injected into route handlers via axum
/// state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub producer: FutureProducer,
    pub topic: String,
}
