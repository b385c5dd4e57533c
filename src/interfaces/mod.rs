//! Boundary adapters: input scripts in, rendered frames and reports out.

pub mod csv;
