use crate::generation::GenerationClient;
use crate::store::Store;
use std::sync::Arc;

// Shared across all requests. The store clones cheaply (Arc-backed
// maps); the generation client is behind an Arc so tests can swap in
// stub providers.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub generator: Arc<GenerationClient>,
    pub jwt_secret: String,
}
