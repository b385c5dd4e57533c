use super::network::Network;
use serde::Serialize;

/// Where the form is in its send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Ready,
    Confirming,
}

/// The user's current choices on the payment form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub amount: String,
    pub network: Network,
    /// Empty, or the address of a known supplier.
    pub supplier_address: String,
    pub show_success: bool,
}

impl SelectionState {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Amount and supplier are both set. The network plays no part.
    pub fn is_ready(&self) -> bool {
        !self.amount.is_empty() && !self.supplier_address.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.show_success {
            Phase::Confirming
        } else if self.is_ready() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Leaves the confirmation window. The network choice is kept.
    pub fn clear(&mut self) {
        self.show_success = false;
        self.amount.clear();
        self.supplier_address.clear();
    }
}
