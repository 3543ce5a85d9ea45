use dashmap::DashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::engine::resolver::Origin;
use crate::models::resolution::Resolution;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub origin: Origin,
    pub resolutions: DashMap<Uuid, Resolution>,
    pub resolution_events_tx: broadcast::Sender<Resolution>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(origin: Origin, event_buffer_size: usize) -> Self {
        let (resolution_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        Self {
            origin,
            resolutions: DashMap::new(),
            resolution_events_tx,
            metrics: Metrics::new(),
        }
    }
}
