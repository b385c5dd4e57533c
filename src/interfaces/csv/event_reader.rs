use crate::application::input::UiEvent;
use crate::domain::network::Network;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Amount,
    Network,
    Supplier,
    Send,
    Reset,
    Wait,
}

/// One row of an input script: `action, value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ScriptRecord {
    pub action: Action,
    pub value: Option<String>,
}

impl TryFrom<ScriptRecord> for UiEvent {
    type Error = PaymentError;

    fn try_from(record: ScriptRecord) -> Result<Self> {
        let value = record.value.unwrap_or_default();
        match record.action {
            Action::Amount => Ok(UiEvent::SetAmount(value)),
            Action::Network => value.parse::<Network>().map(UiEvent::SetNetwork),
            Action::Supplier => Ok(UiEvent::SelectSupplier(value)),
            Action::Send => Ok(UiEvent::Send),
            Action::Reset => Ok(UiEvent::Reset),
            Action::Wait => value
                .parse::<u64>()
                .map(|ms| UiEvent::Wait(Duration::from_millis(ms)))
                .map_err(|_| {
                    PaymentError::InvalidEvent(format!("wait needs milliseconds, got '{value}'"))
                }),
        }
    }
}

/// Reads input events from a CSV script.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so rows without a value (`send`) need no trailing comma.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts script rows.
    pub fn events(self) -> impl Iterator<Item = Result<UiEvent>> {
        self.reader.into_deserialize::<ScriptRecord>().map(|result| {
            result
                .map_err(PaymentError::from)
                .and_then(UiEvent::try_from)
        })
    }
}
