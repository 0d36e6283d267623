//! Parking Lot Simulation Library
//!
//! A small parking lot model with pluggable spot selection and fee policies,
//! runnable headless from the command line.

pub mod parking;
