use crate::domain::ports::{EventSink, PaymentEvent};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory record of published payment events.
///
/// Uses `Arc<RwLock<Vec<PaymentEvent>>>` so clones share one log. Suited to
/// tests and to embedders that poll for confirmations.
#[derive(Default, Clone)]
pub struct InMemoryEventLog {
    events: Arc<RwLock<Vec<PaymentEvent>>>,
}

impl InMemoryEventLog {
    /// Creates a new, empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event published so far, oldest first.
    pub async fn events(&self) -> Vec<PaymentEvent> {
        self.events.read().await.clone()
    }

    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl EventSink for InMemoryEventLog {
    async fn publish(&self, event: PaymentEvent) -> Result<()> {
        let mut events = self.events.write().await;
        events.push(event);
        Ok(())
    }
}
