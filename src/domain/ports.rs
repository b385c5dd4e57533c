use super::network::Network;
use super::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Why the form went back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetCause {
    /// The confirmation window ran its full delay.
    Expired,
    /// `reset` was called directly.
    Manual,
}

/// Notifications emitted by the payment controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PaymentEvent {
    Confirmed(Receipt),
    Reset { cause: ResetCause, network: Network },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: PaymentEvent) -> Result<()>;
}

pub type EventSinkHandle = Arc<dyn EventSink>;
