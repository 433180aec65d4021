//! Report assembly and rendering.

pub mod dashboard;
pub mod generator;

pub use dashboard::*;
pub use generator::*;
