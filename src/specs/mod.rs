// src/specs/mod.rs
//
// Page parsers. Each spec turns one fetched page into typed data; pure,
// synchronous, no I/O.

pub mod schedule;
pub mod shot_chart;

use thiserror::Error;

/// Page-structure failures. Fatal for the page (no data can be produced);
/// individual malformed markers are recovered inside the parsers instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no shot-chart container found on {category} page")]
    ContainerMissing { category: &'static str },

    #[error("no schedule table found")]
    ScheduleMissing,
}
