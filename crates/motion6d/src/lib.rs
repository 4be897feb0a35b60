//! Command-line front end for `motion6d-core`.

pub mod config;
pub mod output;
