use crate::domain::network::Network;
use std::time::Duration;

/// An input event from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SetAmount(String),
    SetNetwork(Network),
    /// Supplier address, or empty to clear the selection.
    SelectSupplier(String),
    Send,
    Reset,
    /// Let time pass without input, e.g. while a confirmation is showing.
    Wait(Duration),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SetAmount(_) => "amount",
            UiEvent::SetNetwork(_) => "network",
            UiEvent::SelectSupplier(_) => "supplier",
            UiEvent::Send => "send",
            UiEvent::Reset => "reset",
            UiEvent::Wait(_) => "wait",
        }
    }
}
