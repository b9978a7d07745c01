//! Markov chain text generation library.
//!
//! This crate builds an order-k Markov model of a source text and walks it to
//! synthesize new text whose local statistics match the source:
//! - Character-level or word-level analysis
//! - Optional case-insensitive seeds
//! - Injected random source for reproducible generation
//! - Typed errors, never printed by the library itself

/// Transition table, generator, configuration and sessions.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Text loading and writing helpers used around the model.
pub mod io;

pub use error::{ModelError, ModelResult};
pub use model::config::{ShortSourcePolicy, WriterConfig, validate_length};
pub use model::generator::{Generator, Walk, generate};
pub use model::session::RandomWriter;
pub use model::symbol::{Symbol, SymbolUnit};
pub use model::table::{ModelBuilder, TableSnapshot, TransitionTable};
