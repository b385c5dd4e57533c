//! Application layer orchestrating the payment form.
//!
//! This module defines the `PaymentController`, the single owner of the
//! selection state, and the `PaymentView` read model it renders. The
//! confirmation reset runs as a `tokio` task tied to the controller.

pub mod controller;
pub mod input;
pub mod view;
