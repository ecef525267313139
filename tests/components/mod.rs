//! Integration tests for the built-in components
//!
//! These tests check the evaluation properties every component must satisfy
//! and the behaviour of each shape.

// Boundary loss and interface-mode intensity
mod plasmon_tests;

// Gaussian and Lorentzian steps and densities
mod cdf_tests;

// Ramp background
mod ramp_tests;

// Properties shared by all components
mod contract_tests;
