//! Integration tests for the summed model
//!
//! These tests exercise the engine-facing surface: evaluation, residuals,
//! free-parameter vectors, jacobians and configuration.

mod config_tests;
mod model_tests;
