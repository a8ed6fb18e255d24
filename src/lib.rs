//! Forgecast - Gear Enhancement Cost Precomputation
//!
//! Monte-Carlo simulation engine that precomputes percentile material and
//! gold costs for every enhancement parameter combination, so the lookup
//! layer answers queries with a single key read instead of a live
//! simulation.

pub mod build_info;
pub mod constants;
pub mod error;
pub mod materials;
pub mod rates;
pub mod simulator;
pub mod tables;
