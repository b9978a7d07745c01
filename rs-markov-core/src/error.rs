use std::io;

use thiserror::Error;

use crate::model::symbol::SymbolUnit;

/// Errors raised by model construction and generation.
///
/// The core never prints: every failure is returned to the caller, which
/// decides how to report it.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The order of analysis was negative.
	#[error("the level of analysis (k) must be non-negative, got k = {0}")]
	InvalidOrder(i64),

	/// The requested output length was negative.
	#[error("the length of output must be non-negative, got length = {0}")]
	InvalidLength(i64),

	/// The source holds fewer than `k + 1` symbols, so no seed has a continuation.
	#[error("the source must contain at least {needed} {unit}, found {found}")]
	InsufficientSource {
		unit: SymbolUnit,
		needed: usize,
		found: usize,
	},

	/// Generation was requested against a table without any seed.
	#[error("cannot generate from an empty transition table")]
	EmptyTable,

	/// A seed drawn from the source is missing from the table, so the source
	/// is not the one the table was built from.
	#[error("the source does not match the order {order} transition table")]
	SourceMismatch { order: usize },

	/// Reading the source or writing the output failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
