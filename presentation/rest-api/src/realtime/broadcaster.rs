use tokio::sync::broadcast;
use tracing::warn;

use business::domain::notifier::CatalogNotifier;
use business::domain::product::model::Product;

const CHANNEL_CAPACITY: usize = 16;

/// Fan-out channel for catalog snapshots. Cloning shares the same channel,
/// so one instance can serve both the HTTP layer and the use cases.
#[derive(Clone)]
pub struct CatalogBroadcaster {
    sender: broadcast::Sender<String>,
}

impl CatalogBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Default for CatalogBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogNotifier for CatalogBroadcaster {
    fn publish(&self, products: Vec<Product>) {
        let payload = match serde_json::to_string(&products) {
            Ok(json) => json,
            Err(error) => {
                warn!("Realtime -- failed to serialize catalog snapshot: {error}");
                return;
            }
        };
        // send only fails when no subscriber is connected, which is fine.
        let _ = self.sender.send(payload);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use business::domain::product::model::Product;

    use super::*;

    fn sample_product() -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "Keyboard".to_string(),
            None,
            49.9,
            None,
            "KB-1".to_string(),
            10,
            "peripherals".to_string(),
            true,
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn subscriber_receives_published_snapshot() {
        let broadcaster = CatalogBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.publish(vec![sample_product()]);

        let payload = rx.try_recv().unwrap();
        assert!(payload.contains("Keyboard"));
    }

    #[test]
    fn publish_without_subscribers_does_not_panic() {
        let broadcaster = CatalogBroadcaster::new();
        broadcaster.publish(vec![]);
    }
}
