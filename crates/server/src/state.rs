use std::sync::Arc;

use service::records::RecordStore;

/// Per-process handler state. Holds no request data; the store owns all records.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self { Self { store } }
}
