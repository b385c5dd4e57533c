use crate::domain::summary::{ASSET, TransactionSummary};
use crate::domain::supplier::SupplierDirectory;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes reference data and one-off quotes as CSV.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

#[derive(Serialize)]
struct QuoteRecord<'a> {
    network: &'a str,
    rate: String,
    amount: String,
    fee: String,
    total: String,
    asset: &'a str,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    /// Writes the directory as `id,name,address,location`.
    pub fn write_suppliers(&mut self, directory: &SupplierDirectory) -> Result<()> {
        for supplier in directory.all() {
            self.writer.serialize(supplier)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_quote(&mut self, summary: &TransactionSummary) -> Result<()> {
        self.writer.serialize(QuoteRecord {
            network: summary.network.as_str(),
            rate: summary.network.fee_rate().to_string(),
            amount: summary.amount.to_string(),
            fee: summary.fee.to_string(),
            total: summary.total.to_string(),
            asset: ASSET,
        })?;
        self.writer.flush()?;
        Ok(())
    }
}
