use crate::error::PaymentError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement rail a payment is routed over.
///
/// The rail only determines the fee rate; nothing is ever broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Xrpl,
    Eth,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Xrpl, Network::Eth];

    /// Multiplier applied directly to the amount: `fee = amount * rate`.
    ///
    /// The label shown next to each rail reads as a percentage ("0.001%")
    /// but the rate is applied as a plain fraction.
    pub fn fee_rate(&self) -> Decimal {
        match self {
            Network::Xrpl => dec!(0.001),
            Network::Eth => dec!(0.3),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Xrpl => "XRPL",
            Network::Eth => "Ethereum",
        }
    }

    pub fn fee_label(&self) -> String {
        format!("Fee: {}%", self.fee_rate().normalize())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Xrpl => "xrpl",
            Network::Eth => "eth",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xrpl" => Ok(Network::Xrpl),
            "eth" => Ok(Network::Eth),
            other => Err(PaymentError::UnknownNetwork(other.to_string())),
        }
    }
}
