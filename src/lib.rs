// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod persistence;

pub use crate::config::BuildConfig;
pub use crate::core::engine::ReadabilityEngine;
pub use crate::core::normalizer::normalize;
pub use crate::core::scorer::ReadabilityResult;
pub use crate::core::syllables::SyllableEstimator;
pub use crate::core::types::{ReadabilityRating, SyllableDictionary};
pub use crate::corpus::{BuildOutput, BuildStats, CorpusBuilder};
pub use crate::error::{ReadabilityError, Result};
