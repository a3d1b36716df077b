// File: src/corpus/mod.rs
//! Offline build of the syllable dictionary from a hyphenation word list.

pub mod builder;
pub mod entry;
pub mod stats;

pub use builder::{run_build, BuildOutput, CorpusBuilder, CorpusTally, Miss};
pub use entry::{CorpusNormalizer, FilterReason, HyphenatedWord};
pub use stats::BuildStats;
