//! Day Weather CLI Library
//!
//! This module exposes the fetch pipeline and its parts for use in integration tests.

pub mod cli;
pub mod config;
pub mod data;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod sparkline;
pub mod stats;
pub mod time;
