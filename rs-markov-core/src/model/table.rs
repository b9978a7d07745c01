use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

use super::continuations::Continuations;
use super::symbol::{Symbol, SymbolUnit};

/// Builds a `TransitionTable` of a fixed order from a source sequence.
///
/// # Notes
/// - `order` is the seed length `k`; `k = 0` is valid and yields a single
///   empty seed mapping to every symbol of the source.
/// - With `fold_case`, seeds are stored under their lower-case form while the
///   continuation symbols keep their original case.
#[derive(Clone, Copy, Debug)]
pub struct ModelBuilder {
	order: usize,
	fold_case: bool,
}

impl ModelBuilder {
	/// Creates a builder for order `order` without case folding.
	pub fn new(order: usize) -> Self {
		Self { order, fold_case: false }
	}

	/// Enables or disables case-insensitive seeds.
	pub fn fold_case(mut self, fold_case: bool) -> Self {
		self.fold_case = fold_case;
		self
	}

	/// Builds the table in a single pass over `source`.
	///
	/// For every `i` in `0..=len - k - 1`, the symbol `source[i + k]` is
	/// appended to the entry of the seed `source[i..i + k]`.
	///
	/// # Notes
	/// - A source shorter than `k + 1` symbols yields an empty table.
	/// - The result, continuation order included, only depends on `source`
	///   and the builder settings.
	pub fn build<S: Symbol>(&self, source: &[S]) -> TransitionTable<S> {
		let mut table = TransitionTable {
			order: self.order,
			fold_case: self.fold_case,
			states: HashMap::new(),
		};

		if source.len() <= self.order {
			log::debug!(
				"source of {} {} is too short for order {}, table left empty",
				source.len(),
				S::UNIT,
				self.order
			);
			return table;
		}

		for i in 0..source.len() - self.order {
			let seed: Vec<S> = source[i..i + self.order]
				.iter()
				.map(|symbol| table.canonical(symbol))
				.collect();
			let next = source[i + self.order].clone();

			table.states.entry(seed).or_insert_with(Continuations::new).push(next);
		}

		log::debug!(
			"built order {} table: {} seeds, {} transitions",
			self.order,
			table.len(),
			table.total_transitions()
		);
		table
	}
}

/// Mapping from every seed observed in a source to the symbols that followed it.
///
/// The table is read-only once built.
///
/// # Invariants
/// - Every key has exactly `order` symbols
/// - Every entry holds at least one continuation
/// - The number of continuations across all entries is `max(0, len(source) - order)`
#[derive(Clone, Debug)]
pub struct TransitionTable<S> {
	/// Seed length `k`.
	order: usize,

	/// Whether keys are stored (and looked up) in lower case.
	fold_case: bool,

	/// Seed (canonical form) to its continuation multiset.
	states: HashMap<Vec<S>, Continuations<S>>,
}

impl<S: Symbol> TransitionTable<S> {
	pub fn order(&self) -> usize {
		self.order
	}

	pub fn folds_case(&self) -> bool {
		self.fold_case
	}

	/// Number of distinct seeds.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Sum of the continuation counts over every seed.
	pub fn total_transitions(&self) -> usize {
		self.states.values().map(Continuations::len).sum()
	}

	/// Returns the continuations recorded after `seed`.
	///
	/// The seed is folded first when the table is case-insensitive.
	pub fn continuations(&self, seed: &[S]) -> Option<&[S]> {
		self.lookup(&self.canonical_seed(seed)).map(Continuations::as_slice)
	}

	pub fn contains_seed(&self, seed: &[S]) -> bool {
		self.lookup(&self.canonical_seed(seed)).is_some()
	}

	/// Iterates over `(seed, continuations)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&[S], &[S])> {
		self.states.iter().map(|(seed, continuations)| (seed.as_slice(), continuations.as_slice()))
	}

	/// Entries sorted by seed, for stable diagnostic output.
	pub fn sorted_entries(&self) -> Vec<(&[S], &[S])> {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_by(|a, b| a.0.cmp(b.0));
		entries
	}

	/// Serializable view of the table, seeds and symbols rendered as text.
	pub fn snapshot(&self) -> TableSnapshot {
		let entries = self
			.sorted_entries()
			.into_iter()
			.map(|(seed, continuations)| SnapshotEntry {
				seed: S::join(seed),
				continuations: continuations
					.iter()
					.map(|symbol| S::join(std::slice::from_ref(symbol)))
					.collect(),
			})
			.collect();

		TableSnapshot {
			unit: S::UNIT,
			order: self.order,
			fold_case: self.fold_case,
			seeds: self.len(),
			transitions: self.total_transitions(),
			entries,
		}
	}

	/// Pretty-printed JSON rendering of `snapshot`.
	pub fn snapshot_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(&self.snapshot())
	}

	/// Looks up an already canonical seed.
	pub(crate) fn lookup(&self, key: &[S]) -> Option<&Continuations<S>> {
		self.states.get(key)
	}

	/// Canonical form of a symbol used in seeds.
	pub(crate) fn canonical(&self, symbol: &S) -> S {
		if self.fold_case { symbol.fold() } else { symbol.clone() }
	}

	fn canonical_seed<'a>(&self, seed: &'a [S]) -> Cow<'a, [S]> {
		if self.fold_case {
			Cow::Owned(seed.iter().map(Symbol::fold).collect())
		} else {
			Cow::Borrowed(seed)
		}
	}
}

impl<S: Symbol> PartialEq for TransitionTable<S> {
	fn eq(&self, other: &Self) -> bool {
		self.order == other.order && self.fold_case == other.fold_case && self.states == other.states
	}
}

impl<S: Symbol> Eq for TransitionTable<S> {}

/// Diagnostic dump of a `TransitionTable`.
#[derive(Serialize, Debug)]
pub struct TableSnapshot {
	pub unit: SymbolUnit,
	pub order: usize,
	pub fold_case: bool,
	pub seeds: usize,
	pub transitions: usize,
	pub entries: Vec<SnapshotEntry>,
}

/// One seed of a `TableSnapshot`.
#[derive(Serialize, Debug)]
pub struct SnapshotEntry {
	pub seed: String,
	pub continuations: Vec<String>,
}
