//! Supplier payment form core.
//!
//! A user picks a supplier, a settlement network and an amount; the crate
//! derives the fee and total, gates the send action on the selection being
//! complete, and shows a simulated confirmation that resets itself after a
//! fixed delay. Nothing is settled on any network.
//!
//! - [`domain`] - suppliers, networks, the selection state and the pure
//!   fee/total derivation.
//! - [`application`] - the `PaymentController` state machine and its view.
//! - [`infrastructure`] - event sink adapters.
//! - [`interfaces`] - CSV input scripts and output writers.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;
