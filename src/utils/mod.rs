//! Utility functions and helpers for the specfit-rs library.

pub mod finite_difference;

pub use finite_difference::{derivative, partial_derivative};
