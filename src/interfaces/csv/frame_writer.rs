use crate::application::view::PaymentView;
use crate::domain::network::Network;
use crate::domain::selection::Phase;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Output encoding for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FrameFormat {
    /// One flat CSV row per frame.
    #[default]
    Csv,
    /// One JSON object per line carrying the full view.
    Json,
}

/// Flat projection of a [`PaymentView`] for tabular output.
#[derive(Debug, Serialize, PartialEq)]
pub struct FrameRecord {
    pub step: usize,
    pub action: String,
    pub phase: Phase,
    pub send_enabled: bool,
    pub network: Network,
    pub amount: String,
    pub supplier: String,
    pub fee: String,
    pub total: String,
    pub confirmation: String,
}

impl FrameRecord {
    pub fn new(step: usize, action: &str, view: &PaymentView) -> Self {
        let (fee, total) = view
            .summary
            .as_ref()
            .map(|s| (s.fee.to_string(), s.total.to_string()))
            .unwrap_or_default();
        Self {
            step,
            action: action.to_string(),
            phase: view.phase,
            send_enabled: view.send_enabled,
            network: view.network,
            amount: view.amount.clone(),
            supplier: view
                .supplier
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            fee,
            total,
            confirmation: view
                .confirmation
                .as_ref()
                .map(|c| c.message.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    step: usize,
    action: &'a str,
    view: &'a PaymentView,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes one rendered frame per processed input event.
pub struct FrameWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(destination: W, format: FrameFormat) -> Self {
        let sink = match format {
            FrameFormat::Csv => Sink::Csv(csv::Writer::from_writer(destination)),
            FrameFormat::Json => Sink::Json(destination),
        };
        Self { sink }
    }

    pub fn write_frame(&mut self, step: usize, action: &str, view: &PaymentView) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(FrameRecord::new(step, action, view))?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, &JsonFrame { step, action, view })?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
