//! # Rewrite Orchestration
//!
//! The two user-facing pipelines over the lower crates: [`DedupEngine`]
//! lowers pairwise similarity against the original text, [`DestyleEngine`]
//! dampens the marker signals of machine-generated prose. Both walk the
//! input paragraph by paragraph, pick a strategy tier, and fall back to the
//! rule transformer whenever text generation is unavailable or misbehaves.
//!
//! ## What we do
//!
//! - Map dedup strength `1..=5` to a strategy tier: rules alone, rules
//!   with whole-paragraph generation, or sentence-batch generation.
//! - Track protected terminology per run and reject generated rewrites
//!   that dropped a term their unit carried.
//! - Score before and after (pairwise similarity for dedup, style
//!   likelihood for destyle) and derive human-readable change notes.
//!
//! ## Invariants worth knowing
//!
//! - Generation failures never fail a run; the affected unit falls back
//!   to the rule tier and the run completes.
//! - A seeded [`EngineConfig`] makes whole runs reproducible.
//! - Empty input short-circuits to an unchanged result with zero scores.

mod config;
mod dedup;
mod destyle;
mod dispatch;
mod error;
mod prompt;
mod report;
mod strategy;
mod types;

pub use config::EngineConfig;
pub use dedup::DedupEngine;
pub use destyle::DestyleEngine;
pub use error::EngineError;
pub use strategy::Strategy;
pub use types::{RewriteKind, RewriteResult};
