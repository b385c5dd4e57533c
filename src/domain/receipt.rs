use super::network::Network;
use super::summary::{ASSET, TransactionSummary};
use super::supplier::Supplier;
use serde::Serialize;

/// Snapshot taken when a payment is sent.
///
/// The confirmation is rendered from this snapshot, so it keeps showing the
/// sent amount and supplier after the form fields are cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub amount: String,
    pub supplier: Supplier,
    pub network: Network,
    pub summary: TransactionSummary,
}

impl Receipt {
    pub fn new(amount: &str, supplier: &Supplier, network: Network) -> Self {
        Self {
            amount: amount.to_string(),
            supplier: supplier.clone(),
            network,
            summary: TransactionSummary::compute(amount, network),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "{} {} has been sent to {}",
            self.amount, ASSET, self.supplier.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::SupplierDirectory;

    #[test]
    fn test_receipt_message() {
        let directory = SupplierDirectory::new();
        let supplier = directory.find_by_id(3).unwrap();
        let receipt = Receipt::new("250", supplier, Network::Eth);
        assert_eq!(
            receipt.message(),
            "250 RLUSD has been sent to Patel Cotton Exports"
        );
        assert_eq!(receipt.summary.total.to_string(), "325.0000");
    }
}
