// src/config/mod.rs
pub mod consts;
pub mod heuristics;
pub mod options;

pub use heuristics::Heuristics;
pub use options::Options;
