use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use super::symbol::SymbolUnit;
use super::table::ModelBuilder;

/// What to do with a source holding fewer than `k + 1` symbols.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShortSourcePolicy {
	/// Fail with `InsufficientSource` when the source is loaded.
	#[default]
	Reject,
	/// Accept the source; the table stays empty and every generation is empty.
	Empty,
}

/// Settings of a generation session.
///
/// # Responsibilities
/// - Hold the order of analysis, the symbol unit and the case folding flag
/// - Hold the policy applied to sources too short for the order
/// - Optionally pin the random source to a fixed seed
///
/// # Invariants
/// - `order` is always a validated, non-negative value
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WriterConfig {
	/// Order of analysis (`k`).
	order: usize,

	/// Unit of analysis.
	pub unit: SymbolUnit,

	/// Case-insensitive seeds.
	pub fold_case: bool,

	/// Handling of sources shorter than `k + 1` symbols.
	pub short_source: ShortSourcePolicy,

	/// Fixed seed for the random source; `None` uses the thread RNG.
	pub rng_seed: Option<u64>,
}

impl WriterConfig {
	/// Creates a configuration of order `order` with default settings.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order` is negative.
	pub fn new(order: i64) -> ModelResult<Self> {
		let mut config = Self {
			order: 0,
			unit: SymbolUnit::default(),
			fold_case: false,
			short_source: ShortSourcePolicy::default(),
			rng_seed: None,
		};
		config.set_order(order)?;
		Ok(config)
	}

	/// Returns the order of analysis.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the order of analysis.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order` is negative.
	pub fn set_order(&mut self, order: i64) -> ModelResult<()> {
		self.order = usize::try_from(order).map_err(|_| ModelError::InvalidOrder(order))?;
		Ok(())
	}

	/// Returns a `ModelBuilder` matching these settings.
	pub fn builder(&self) -> ModelBuilder {
		ModelBuilder::new(self.order).fold_case(self.fold_case)
	}

	/// Checks that a source of `found` symbols can be modelled.
	///
	/// # Errors
	/// Returns `InsufficientSource` under `ShortSourcePolicy::Reject` when
	/// `found < k + 1`.
	pub fn check_source_len(&self, found: usize) -> ModelResult<()> {
		if found <= self.order && self.short_source == ShortSourcePolicy::Reject {
			return Err(ModelError::InsufficientSource {
				unit: self.unit,
				needed: self.order + 1,
				found,
			});
		}
		Ok(())
	}
}

/// Validates a requested output length.
///
/// # Errors
/// Returns `InvalidLength` if `length` is negative.
pub fn validate_length(length: i64) -> ModelResult<usize> {
	usize::try_from(length).map_err(|_| ModelError::InvalidLength(length))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn negative_order_is_rejected() {
		assert!(matches!(WriterConfig::new(-1), Err(ModelError::InvalidOrder(-1))));
	}

	#[test]
	fn defaults() {
		let config = WriterConfig::new(3).unwrap();
		assert_eq!(config.order(), 3);
		assert_eq!(config.unit, SymbolUnit::Char);
		assert!(!config.fold_case);
		assert_eq!(config.short_source, ShortSourcePolicy::Reject);
		assert_eq!(config.rng_seed, None);
	}

	#[test]
	fn set_order_keeps_previous_value_on_error() {
		let mut config = WriterConfig::new(2).unwrap();
		assert!(config.set_order(-5).is_err());
		assert_eq!(config.order(), 2);
	}

	#[test]
	fn negative_length_is_rejected() {
		assert_eq!(validate_length(0).unwrap(), 0);
		assert_eq!(validate_length(12).unwrap(), 12);
		assert!(matches!(validate_length(-3), Err(ModelError::InvalidLength(-3))));
	}

	#[test]
	fn short_source_follows_policy() {
		let mut config = WriterConfig::new(4).unwrap();
		config.unit = SymbolUnit::Word;

		let err = config.check_source_len(4).unwrap_err();
		assert_eq!(err.to_string(), "the source must contain at least 5 words, found 4");
		assert!(config.check_source_len(5).is_ok());

		config.short_source = ShortSourcePolicy::Empty;
		assert!(config.check_source_len(0).is_ok());
	}
}
