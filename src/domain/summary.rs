use super::network::Network;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Asset every amount, fee and total is denominated in.
pub const ASSET: &str = "RLUSD";

/// Number of decimal places figures are displayed with.
pub const DISPLAY_PRECISION: u32 = 4;

/// A derived monetary figure.
///
/// Amount text that cannot be read as a number does not raise an error: it
/// turns into `NaN` and flows through fee and total unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Number(Decimal),
    NaN,
}

impl Figure {
    /// Reads amount text the way a browser coerces a numeric input value:
    /// surrounding whitespace is ignored, blank text is zero and scientific
    /// notation is accepted. Anything besides digits, signs, a decimal point
    /// and an exponent marker (digit separators included) is `NaN`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Figure::Number(Decimal::ZERO);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        {
            return Figure::NaN;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Figure::Number)
            .unwrap_or(Figure::NaN)
    }

    fn value(&self) -> Option<Decimal> {
        match self {
            Figure::Number(value) => Some(*value),
            Figure::NaN => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        self.value().is_none()
    }

    fn scaled_by(self, rate: Decimal) -> Self {
        match self {
            Figure::Number(value) => value
                .checked_mul(rate)
                .map(Figure::Number)
                .unwrap_or(Figure::NaN),
            Figure::NaN => Figure::NaN,
        }
    }

    fn plus(self, rhs: Figure) -> Self {
        match (self, rhs) {
            (Figure::Number(a), Figure::Number(b)) => {
                a.checked_add(b).map(Figure::Number).unwrap_or(Figure::NaN)
            }
            _ => Figure::NaN,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Number(value) => {
                let rounded = value.round_dp_with_strategy(
                    DISPLAY_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                write!(f, "{:.*}", DISPLAY_PRECISION as usize, rounded)
            }
            Figure::NaN => f.write_str("NaN"),
        }
    }
}

impl Serialize for Figure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Fee and total for an amount sent over a network.
///
/// Always derived from the current amount text and network; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub network: Network,
    pub amount: Figure,
    pub fee: Figure,
    pub total: Figure,
}

impl TransactionSummary {
    /// Computes `fee = amount * rate` and `total = amount + fee` with no
    /// intermediate rounding.
    pub fn compute(amount: &str, network: Network) -> Self {
        let amount = Figure::parse(amount);
        let fee = amount.scaled_by(network.fee_rate());
        let total = amount.plus(fee);
        Self {
            network,
            amount,
            fee,
            total,
        }
    }
}
