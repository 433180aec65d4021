//! QADash library.
//!
//! Aggregates API test campaign results (test cases, endpoint checks,
//! recommendations) into dashboard metrics and renders them as Markdown
//! or JSON. The `qadash` binary is a thin CLI over these modules.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod fixture;
pub mod models;
pub mod report;
