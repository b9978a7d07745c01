//! Order-k Markov model of a symbol sequence and its text generator.
//!
//! This module provides:
//! - Symbol units (`char` or whitespace-delimited words) via the `Symbol` trait
//! - Transition table construction (`ModelBuilder`, `TransitionTable`)
//! - Randomized generation with silent reseeding (`Generator`)
//! - Session settings (`WriterConfig`) and sessions (`RandomWriter`)

/// Unit of analysis and its text conversions.
pub mod symbol;

/// Ordered multiset of the symbols following one seed.
///
/// Supports uniform sampling with replacement.
pub mod continuations;

/// Table construction (`ModelBuilder`) and read-only introspection
/// (`TransitionTable`, `TableSnapshot`).
pub mod table;

/// Rolling seed window.
///
/// Not exposed.
mod seed;

/// Stochastic walk over a transition table.
pub mod generator;

/// Validated session settings.
pub mod config;

/// Source loading, table building and text generation for one source.
pub mod session;
