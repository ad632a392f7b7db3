// src/core/mod.rs

pub mod net;
pub mod patterns;
pub mod sanitize;
