use crate::domain::network::Network;
use crate::domain::receipt::Receipt;
use crate::domain::selection::{Phase, SelectionState};
use crate::domain::summary::{Figure, TransactionSummary};
use crate::domain::supplier::{Supplier, SupplierDirectory};
use serde::Serialize;

/// Summary panel shown while the form is ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub supplier_name: String,
    pub amount: String,
    pub fee: Figure,
    pub total: Figure,
}

/// Success popup content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationView {
    pub amount: String,
    pub supplier_name: String,
    pub message: String,
}

impl From<&Receipt> for ConfirmationView {
    fn from(receipt: &Receipt) -> Self {
        Self {
            amount: receipt.amount.clone(),
            supplier_name: receipt.supplier.name.clone(),
            message: receipt.message(),
        }
    }
}

/// Everything the presentation layer needs to draw the form.
///
/// Rebuilt from the selection on every read, so the summary can never drift
/// from the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentView {
    pub phase: Phase,
    pub send_enabled: bool,
    pub network: Network,
    pub network_label: &'static str,
    pub fee_label: String,
    pub amount: String,
    pub supplier: Option<Supplier>,
    pub summary: Option<SummaryView>,
    pub confirmation: Option<ConfirmationView>,
}

impl PaymentView {
    pub fn render(
        selection: &SelectionState,
        receipt: Option<&Receipt>,
        directory: &SupplierDirectory,
    ) -> Self {
        let supplier = directory
            .find_by_address(&selection.supplier_address)
            .cloned();

        let summary = if selection.is_ready() {
            let figures = TransactionSummary::compute(&selection.amount, selection.network);
            Some(SummaryView {
                supplier_name: supplier
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_default(),
                amount: selection.amount.clone(),
                fee: figures.fee,
                total: figures.total,
            })
        } else {
            None
        };

        let confirmation = if selection.show_success {
            receipt.map(ConfirmationView::from)
        } else {
            None
        };

        Self {
            phase: selection.phase(),
            send_enabled: selection.is_ready(),
            network: selection.network,
            network_label: selection.network.display_name(),
            fee_label: selection.network.fee_label(),
            amount: selection.amount.clone(),
            supplier,
            summary,
            confirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAJESH: &str = "rSupp1RajeshText123456789Delhi";

    fn selection(amount: &str, supplier: &str, network: Network) -> SelectionState {
        SelectionState {
            amount: amount.to_string(),
            network,
            supplier_address: supplier.to_string(),
            show_success: false,
        }
    }

    #[test]
    fn test_no_summary_without_amount_or_supplier() {
        let directory = SupplierDirectory::new();

        let view = PaymentView::render(&selection("", RAJESH, Network::Xrpl), None, &directory);
        assert!(view.summary.is_none());
        assert!(!view.send_enabled);

        let view = PaymentView::render(&selection("100", "", Network::Xrpl), None, &directory);
        assert!(view.summary.is_none());
        assert!(!view.send_enabled);
        assert_eq!(view.phase, Phase::Idle);
    }

    #[test]
    fn test_ready_view_shows_summary() {
        let directory = SupplierDirectory::new();
        let view = PaymentView::render(&selection("100", RAJESH, Network::Xrpl), None, &directory);

        assert_eq!(view.phase, Phase::Ready);
        assert!(view.send_enabled);
        assert_eq!(view.network_label, "XRPL");
        assert_eq!(view.fee_label, "Fee: 0.001%");
        let summary = view.summary.unwrap();
        assert_eq!(summary.supplier_name, "Rajesh Textiles Ltd");
        assert_eq!(summary.amount, "100");
        assert_eq!(summary.fee.to_string(), "0.1000");
        assert_eq!(summary.total.to_string(), "100.1000");
        assert!(view.confirmation.is_none());
    }

    #[test]
    fn test_summary_follows_network() {
        let directory = SupplierDirectory::new();
        let view = PaymentView::render(&selection("100", RAJESH, Network::Eth), None, &directory);
        assert_eq!(view.network_label, "Ethereum");
        assert_eq!(view.fee_label, "Fee: 0.3%");
        let summary = view.summary.unwrap();
        assert_eq!(summary.fee.to_string(), "30.0000");
        assert_eq!(summary.total.to_string(), "130.0000");
    }

    #[test]
    fn test_confirmation_uses_receipt() {
        let directory = SupplierDirectory::new();
        let supplier = directory.find_by_address(RAJESH).unwrap();
        let receipt = Receipt::new("75", supplier, Network::Xrpl);

        let mut state = selection("", "", Network::Xrpl);
        state.show_success = true;
        let view = PaymentView::render(&state, Some(&receipt), &directory);

        assert_eq!(view.phase, Phase::Confirming);
        let confirmation = view.confirmation.unwrap();
        assert_eq!(confirmation.amount, "75");
        assert_eq!(confirmation.supplier_name, "Rajesh Textiles Ltd");
        assert_eq!(
            confirmation.message,
            "75 RLUSD has been sent to Rajesh Textiles Ltd"
        );
    }

    #[test]
    fn test_receipt_hidden_outside_confirmation() {
        let directory = SupplierDirectory::new();
        let supplier = directory.find_by_address(RAJESH).unwrap();
        let receipt = Receipt::new("75", supplier, Network::Xrpl);

        let view = PaymentView::render(&selection("", "", Network::Xrpl), Some(&receipt), &directory);
        assert!(view.confirmation.is_none());
    }
}
