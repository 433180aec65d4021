//! Analysis modules.
//!
//! Derived metrics over the loaded API reports.

pub mod aggregator;

pub use aggregator::*;
