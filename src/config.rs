use crate::domain::network::Network;
use std::time::Duration;

/// How long a confirmation stays visible before the form resets.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Runtime settings for a payment controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub reset_delay: Duration,
    /// Network selected when the form starts. A reset does not return to it.
    pub default_network: Network,
}

impl Settings {
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.default_network = network;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            default_network: Network::Xrpl,
        }
    }
}
