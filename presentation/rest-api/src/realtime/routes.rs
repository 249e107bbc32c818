use std::time::Duration;

use futures::stream;
use poem::handler;
use poem::web::Data;
use poem::web::sse::{Event, SSE};
use tokio::sync::broadcast::error::RecvError;

use crate::realtime::broadcaster::CatalogBroadcaster;

/// Streams the full catalog to the client as an `updateProducts` event every
/// time a product is created or deleted. Slow consumers that fall behind the
/// channel capacity skip the missed snapshots and pick up from the latest.
#[handler]
pub fn catalog_events(broadcaster: Data<&CatalogBroadcaster>) -> SSE {
    let rx = broadcaster.subscribe();

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(payload) => {
                    let event = Event::message(payload).event_type("updateProducts");
                    return Some((event, rx));
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });

    SSE::new(events).keep_alive(Duration::from_secs(15))
}
