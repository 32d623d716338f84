use hbnb_db::Storage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the storage handle is a pool or an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter; handlers open a session per request.
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}
