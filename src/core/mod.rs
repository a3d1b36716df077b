// src/core/mod.rs

pub mod engine;
pub mod normalizer;
pub mod scorer;
pub mod syllables;
pub mod types;
