use rand::Rng;

use super::symbol::Symbol;

/// Ordered multiset of the symbols observed after one seed.
///
/// Duplicates are retained in insertion order: a symbol seen three times
/// after the seed occupies three slots and is three times as likely to be
/// drawn as a symbol seen once.
///
/// ## Invariants
/// - Never empty once stored in a `TransitionTable`
/// - Symbols keep their original case, even when the table folds seeds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Continuations<S> {
	symbols: Vec<S>,
}

impl<S: Symbol> Continuations<S> {
	/// Creates an empty multiset.
	pub(crate) fn new() -> Self {
		Self { symbols: Vec::new() }
	}

	/// Records one occurrence of `next` after the seed.
	pub(crate) fn push(&mut self, next: S) {
		self.symbols.push(next);
	}

	/// Number of recorded occurrences (duplicates included).
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Recorded symbols, in source order.
	pub fn as_slice(&self) -> &[S] {
		&self.symbols
	}

	/// Draws one symbol uniformly over the recorded occurrences, with replacement.
	///
	/// Returns `None` if nothing was recorded.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&S> {
		if self.symbols.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.symbols.len());
		self.symbols.get(index)
	}
}
