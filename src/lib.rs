// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;
pub mod source;

pub mod csv;
pub mod file;
pub mod normalize;
pub mod progress;
pub mod runner;

pub use error::{Result, ScrapeError};
