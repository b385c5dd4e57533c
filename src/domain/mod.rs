//! Domain layer: reference data, the selection state and the pure
//! fee/total derivation.

pub mod network;
pub mod ports;
pub mod receipt;
pub mod selection;
pub mod summary;
pub mod supplier;
