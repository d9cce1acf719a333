//! Mathematical primitives for FedTrust.
//!
//! Provides shared math utilities used by the engine stages:
//!
//! - [`stats`]: mean and population standard deviation
//! - [`rounding`]: fixed-decimal rounding for published values

pub mod rounding;
pub mod stats;

pub use rounding::round_to;
pub use stats::{mean, population_std_dev};
