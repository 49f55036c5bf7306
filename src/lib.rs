// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod progress;
pub mod scrape;
pub mod shots;
pub mod stats;
pub mod store;
