//! Energy-flow model for networks of plant microbial fuel cells.
//!
//! [`energy_network`] holds the computation. [`report`] and [`reference`]
//! shape its output and the bench data for display, and [`api`] serves both
//! over HTTP.

pub mod api;
pub mod config;
pub mod energy_network;
pub mod reference;
pub mod report;
pub mod telemetry;
