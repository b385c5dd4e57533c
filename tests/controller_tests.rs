use fleetbridge::application::controller::{PaymentController, SendOutcome};
use fleetbridge::config::Settings;
use fleetbridge::domain::network::Network;
use fleetbridge::domain::ports::{EventSink, EventSinkHandle, PaymentEvent, ResetCause};
use fleetbridge::domain::selection::Phase;
use fleetbridge::domain::supplier::SupplierDirectory;
use fleetbridge::error::{PaymentError, Result};
use fleetbridge::infrastructure::in_memory::InMemoryEventLog;
use std::sync::Arc;
use std::time::Duration;

mod common;

struct FailingSink;

#[async_trait::async_trait]
impl EventSink for FailingSink {
    async fn publish(&self, _event: PaymentEvent) -> Result<()> {
        Err(PaymentError::SinkError("unavailable".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_every_supplier_resolves_in_summary_and_confirmation() {
    let directory = SupplierDirectory::new();
    for supplier in directory.all() {
        let log = InMemoryEventLog::new();
        let controller = PaymentController::new(Settings::default(), Arc::new(log.clone()));
        controller.set_supplier(&supplier.address).await.unwrap();
        controller.set_amount("42").await;

        let summary = controller.view().await.summary.unwrap();
        assert_eq!(summary.supplier_name, supplier.name);

        let receipt = match controller.send().await {
            SendOutcome::Sent(receipt) => receipt,
            other => panic!("expected a sent payment, got {other:?}"),
        };
        assert_eq!(receipt.supplier, *supplier);

        let confirmation = controller.view().await.confirmation.unwrap();
        assert_eq!(confirmation.supplier_name, supplier.name);
        assert_eq!(
            confirmation.message,
            format!("42 RLUSD has been sent to {}", supplier.name)
        );
        assert_eq!(log.events().await, vec![PaymentEvent::Confirmed(receipt)]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_readiness_independent_of_network() {
    let controller = PaymentController::new(Settings::default(), Arc::new(InMemoryEventLog::new()));

    for network in Network::ALL {
        controller.set_network(network).await;
        assert!(!controller.view().await.send_enabled);

        controller.set_amount("1").await;
        assert!(!controller.view().await.send_enabled);

        controller.set_supplier(common::KRISHNA).await.unwrap();
        assert!(controller.view().await.send_enabled);

        controller.set_amount("").await;
        assert!(!controller.view().await.send_enabled);
        controller.set_supplier("").await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_send_cycle_through_trait_object_sink() {
    let log = InMemoryEventLog::new();
    let sink: EventSinkHandle = Arc::new(log.clone());
    let controller = PaymentController::new(Settings::default(), sink);

    controller.set_supplier(common::RAJESH).await.unwrap();
    controller.set_amount("100").await;
    controller.set_network(Network::Eth).await;

    // Drive the form from another task to check the controller is Send + Sync.
    let handle = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.send().await })
    };
    assert!(matches!(handle.await.unwrap(), SendOutcome::Sent(_)));
    assert_eq!(controller.phase().await, Phase::Confirming);

    tokio::time::sleep(Duration::from_millis(3001)).await;
    assert_eq!(controller.phase().await, Phase::Idle);

    let events = log.events().await;
    assert_eq!(events.len(), 2);
    match &events[0] {
        PaymentEvent::Confirmed(receipt) => {
            assert_eq!(receipt.summary.fee.to_string(), "30.0000");
            assert_eq!(receipt.summary.total.to_string(), "130.0000");
        }
        other => panic!("expected confirmation, got {other:?}"),
    }
    assert_eq!(
        events[1],
        PaymentEvent::Reset {
            cause: ResetCause::Expired,
            network: Network::Eth,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_failing_sink_does_not_block_state_machine() {
    let controller = PaymentController::new(Settings::default(), Arc::new(FailingSink));
    controller.set_supplier(common::PATEL).await.unwrap();
    controller.set_amount("5").await;

    assert!(matches!(controller.send().await, SendOutcome::Sent(_)));
    tokio::time::sleep(Duration::from_millis(3001)).await;

    let selection = controller.selection().await;
    assert_eq!(selection.phase(), Phase::Idle);
    assert!(selection.amount.is_empty());
}
