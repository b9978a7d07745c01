use rand::Rng;

use crate::error::{ModelError, ModelResult};
use super::seed::SeedWindow;
use super::symbol::Symbol;
use super::table::TransitionTable;

/// Walks a `TransitionTable` to synthesize new symbol sequences.
///
/// # Responsibilities
/// - Pick a starting seed uniformly among the source positions that have a
///   recorded continuation
/// - Draw each next symbol uniformly from the current seed's continuations
/// - Slide the seed window over the drawn symbols
/// - Reseed silently whenever the rolling seed has no entry in the table
///
/// # Invariants
/// - `source.len() > table.order()`, so at least one seed position exists
/// - `table` is not empty
#[derive(Debug, Clone)]
pub struct Generator<'a, S> {
	table: &'a TransitionTable<S>,
	source: &'a [S],
}

impl<'a, S: Symbol> Generator<'a, S> {
	/// Creates a generator over `table`, reseeding from `source`.
	///
	/// # Errors
	/// - `InsufficientSource` if `source` has no more than `k` symbols.
	/// - `EmptyTable` if `table` holds no seed.
	pub fn new(table: &'a TransitionTable<S>, source: &'a [S]) -> ModelResult<Self> {
		let order = table.order();
		if source.len() <= order {
			return Err(ModelError::InsufficientSource {
				unit: S::UNIT,
				needed: order + 1,
				found: source.len(),
			});
		}
		if table.is_empty() {
			return Err(ModelError::EmptyTable);
		}
		Ok(Self { table, source })
	}

	/// Generates exactly `length` symbols.
	///
	/// # Notes
	/// - Every draw is independent, uniform over the multiset of the current
	///   seed, so frequent continuations are proportionally more likely.
	/// - Dead ends are handled by reseeding; the output is never shortened.
	///
	/// # Errors
	/// Returns `SourceMismatch` if a seed taken from `source` is unknown to
	/// the table, which only happens when the two were not built together.
	pub fn generate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> ModelResult<Vec<S>> {
		self.walk(length, rng).map(|walk| walk.symbols)
	}

	/// Same as `generate`, also reporting where seeds were taken from the source.
	///
	/// # Errors
	/// See `generate`.
	pub fn walk<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> ModelResult<Walk<S>> {
		let mut walk = Walk {
			symbols: Vec::with_capacity(length),
			seeded_at: Vec::new(),
		};
		if length == 0 {
			return Ok(walk);
		}

		let mut window = SeedWindow::new(self.table.order());
		self.reseed(&mut window, rng);
		walk.seeded_at.push(0);

		while walk.symbols.len() < length {
			let continuations = match self.table.lookup(window.as_slice()) {
				Some(continuations) => continuations,
				None => {
					walk.seeded_at.push(walk.symbols.len());
					self.reseed(&mut window, rng);
					self.table
						.lookup(window.as_slice())
						.ok_or(ModelError::SourceMismatch { order: self.table.order() })?
				}
			};

			let next = continuations.sample(rng).ok_or(ModelError::EmptyTable)?.clone();
			window.advance(self.table.canonical(&next));
			walk.symbols.push(next);
		}

		log::debug!(
			"generated {} {} with {} reseeds",
			walk.symbols.len(),
			S::UNIT,
			walk.seeded_at.len() - 1
		);
		Ok(walk)
	}

	/// Replaces the window with a random seed from the source.
	///
	/// The start offset is drawn in `[0, len - k - 1]`, the positions whose
	/// seed is followed by a symbol, so the new seed is always a table key.
	fn reseed<R: Rng + ?Sized>(&self, window: &mut SeedWindow<S>, rng: &mut R) {
		let order = self.table.order();
		let start = rng.random_range(0..self.source.len() - order);
		window.reset(self.source[start..start + order].iter().map(|symbol| self.table.canonical(symbol)));
		log::trace!("reseeded at offset {start}: {:?}", window.as_slice());
	}
}

/// Output of `Generator::walk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<S> {
	/// Generated symbols.
	pub symbols: Vec<S>,

	/// Output positions drawn right after a seed was taken from the source,
	/// in increasing order. The first entry is always 0, the starting seed;
	/// the others are reseeds after a dead end.
	pub seeded_at: Vec<usize>,
}

/// Generates `length` symbols from `table`, reseeding from `source`.
///
/// `length == 0` always succeeds with an empty output, whatever the table holds.
///
/// # Errors
/// See `Generator::new` and `Generator::generate`.
pub fn generate<S: Symbol, R: Rng + ?Sized>(
	table: &TransitionTable<S>,
	source: &[S],
	length: usize,
	rng: &mut R,
) -> ModelResult<Vec<S>> {
	if length == 0 {
		return Ok(Vec::new());
	}
	Generator::new(table, source)?.generate(length, rng)
}
