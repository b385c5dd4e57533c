use super::input::UiEvent;
use super::view::PaymentView;
use crate::config::Settings;
use crate::domain::network::Network;
use crate::domain::ports::{EventSinkHandle, PaymentEvent, ResetCause};
use crate::domain::receipt::Receipt;
use crate::domain::selection::{Phase, SelectionState};
use crate::domain::supplier::SupplierDirectory;
use crate::error::{PaymentError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of asking the controller to send a payment.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The payment was accepted and the confirmation window opened.
    Sent(Receipt),
    /// Amount or supplier is missing. Nothing changed.
    NotReady,
    /// A confirmation is already showing. Nothing changed.
    AlreadyConfirming,
}

struct FormState {
    selection: SelectionState,
    receipt: Option<Receipt>,
    /// Bumped whenever a scheduled reset is armed or invalidated, so a timer
    /// that outlives its confirmation window finds a mismatch and does nothing.
    generation: u64,
    pending_reset: Option<JoinHandle<()>>,
}

impl FormState {
    fn invalidate_pending_reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

/// Owner of the payment form's state.
///
/// `PaymentController` is the only way to change the selection: through
/// `set_amount`, `set_network`, `set_supplier`, `send` and `reset`. The
/// presentation layer reads it back as a [`PaymentView`].
///
/// Cloning is cheap and every clone drives the same form.
#[derive(Clone)]
pub struct PaymentController {
    state: Arc<Mutex<FormState>>,
    directory: Arc<SupplierDirectory>,
    sink: EventSinkHandle,
    reset_delay: Duration,
}

impl PaymentController {
    /// Creates a controller over the fixed supplier directory.
    ///
    /// # Arguments
    ///
    /// * `settings` - Reset delay and starting network.
    /// * `sink` - Receives a notification for each confirmation and reset.
    pub fn new(settings: Settings, sink: EventSinkHandle) -> Self {
        Self::with_directory(settings, sink, SupplierDirectory::new())
    }

    pub fn with_directory(
        settings: Settings,
        sink: EventSinkHandle,
        directory: SupplierDirectory,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                selection: SelectionState::new(settings.default_network),
                receipt: None,
                generation: 0,
                pending_reset: None,
            })),
            directory: Arc::new(directory),
            sink,
            reset_delay: settings.reset_delay,
        }
    }

    pub async fn set_amount(&self, amount: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.selection.amount = amount.into();
    }

    pub async fn set_network(&self, network: Network) {
        let mut state = self.state.lock().await;
        state.selection.network = network;
    }

    /// Selects the supplier with the given address. An empty address clears
    /// the selection; an address outside the directory is rejected and the
    /// current selection is kept.
    pub async fn set_supplier(&self, address: &str) -> Result<()> {
        if !address.is_empty() && self.directory.find_by_address(address).is_none() {
            return Err(PaymentError::UnknownSupplier(address.to_string()));
        }
        let mut state = self.state.lock().await;
        state.selection.supplier_address = address.to_string();
        Ok(())
    }

    /// Sends the payment if the form is ready.
    ///
    /// On success the confirmation window opens and a reset is scheduled
    /// after the configured delay. The handler checks readiness itself, so
    /// calling it with missing fields is a no-op even if a caller ignores the
    /// disabled send control. A send during an open confirmation is ignored
    /// and does not restart the timer.
    pub async fn send(&self) -> SendOutcome {
        let receipt = {
            let mut state = self.state.lock().await;

            if state.selection.show_success {
                debug!("Send ignored, confirmation already showing");
                return SendOutcome::AlreadyConfirming;
            }

            let supplier = match self
                .directory
                .find_by_address(&state.selection.supplier_address)
            {
                Some(supplier) if state.selection.is_ready() => supplier,
                _ => {
                    debug!("Send ignored, amount or supplier missing");
                    return SendOutcome::NotReady;
                }
            };

            let receipt = Receipt::new(&state.selection.amount, supplier, state.selection.network);
            state.selection.show_success = true;
            state.receipt = Some(receipt.clone());

            state.invalidate_pending_reset();
            let generation = state.generation;
            let controller = self.clone();
            let delay = self.reset_delay;
            state.pending_reset = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                controller.expire(generation).await;
            }));

            info!(
                amount = %receipt.amount,
                supplier = %receipt.supplier.name,
                network = %receipt.network,
                delay_ms = delay.as_millis() as u64,
                "Payment sent"
            );
            receipt
        };

        self.publish(PaymentEvent::Confirmed(receipt.clone())).await;
        SendOutcome::Sent(receipt)
    }

    /// Returns the form to idle straight away, cancelling any scheduled
    /// reset. Amount and supplier are cleared; the network is kept.
    pub async fn reset(&self) {
        let network = {
            let mut state = self.state.lock().await;
            state.invalidate_pending_reset();
            state.selection.clear();
            state.receipt = None;
            state.selection.network
        };
        info!("Payment form reset");
        self.publish(PaymentEvent::Reset {
            cause: ResetCause::Manual,
            network,
        })
        .await;
    }

    async fn expire(&self, generation: u64) {
        let network = {
            let mut state = self.state.lock().await;
            if state.generation != generation || !state.selection.show_success {
                debug!(generation, "Stale reset timer ignored");
                return;
            }
            // The running task is this one; detach instead of aborting.
            state.pending_reset = None;
            state.selection.clear();
            state.receipt = None;
            state.selection.network
        };
        info!("Confirmation expired, payment form reset");
        self.publish(PaymentEvent::Reset {
            cause: ResetCause::Expired,
            network,
        })
        .await;
    }

    async fn publish(&self, event: PaymentEvent) {
        if let Err(e) = self.sink.publish(event).await {
            warn!(error = %e, "Failed to publish payment event");
        }
    }

    /// Dispatches one input event to the matching entry point.
    pub async fn apply(&self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::SetAmount(amount) => self.set_amount(amount).await,
            UiEvent::SetNetwork(network) => self.set_network(network).await,
            UiEvent::SelectSupplier(address) => self.set_supplier(&address).await?,
            UiEvent::Send => {
                self.send().await;
            }
            UiEvent::Reset => self.reset().await,
            UiEvent::Wait(duration) => tokio::time::sleep(duration).await,
        }
        Ok(())
    }

    pub async fn view(&self) -> PaymentView {
        let state = self.state.lock().await;
        PaymentView::render(&state.selection, state.receipt.as_ref(), &self.directory)
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.selection.phase()
    }

    pub async fn selection(&self) -> SelectionState {
        self.state.lock().await.selection.clone()
    }
}
