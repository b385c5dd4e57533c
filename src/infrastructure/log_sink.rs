use crate::domain::ports::{EventSink, PaymentEvent};
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Writes each payment event to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSink for TracingEventSink {
    async fn publish(&self, event: PaymentEvent) -> Result<()> {
        match &event {
            PaymentEvent::Confirmed(receipt) => info!(
                target: "fleetbridge::events",
                supplier = %receipt.supplier.name,
                address = %receipt.supplier.address,
                amount = %receipt.amount,
                fee = %receipt.summary.fee,
                total = %receipt.summary.total,
                network = %receipt.network,
                "{}",
                receipt.message()
            ),
            PaymentEvent::Reset { cause, network } => info!(
                target: "fleetbridge::events",
                ?cause,
                %network,
                "Payment form returned to idle"
            ),
        }
        Ok(())
    }
}
