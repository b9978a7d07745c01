/// Rolling seed used during generation.
///
/// The window is the last `order` elements of a backing buffer of capacity
/// `2 * order`. Advancing appends to the buffer; once it is full, the current
/// window is moved back to the front. Each symbol is copied at most twice, so
/// advancing is amortized O(1) and the window is always a contiguous slice
/// usable as a table key.
#[derive(Clone, Debug)]
pub(crate) struct SeedWindow<S> {
	order: usize,
	buffer: Vec<S>,
}

impl<S: Clone> SeedWindow<S> {
	pub(crate) fn new(order: usize) -> Self {
		Self {
			order,
			buffer: Vec::with_capacity(order * 2),
		}
	}

	/// Replaces the window with `seed`.
	///
	/// # Notes
	/// - `seed` must hold exactly `order` symbols.
	pub(crate) fn reset(&mut self, seed: impl IntoIterator<Item = S>) {
		self.buffer.clear();
		self.buffer.extend(seed);
		debug_assert_eq!(self.buffer.len(), self.order);
	}

	/// Drops the oldest symbol and appends `next`.
	///
	/// With `order == 0` the window stays empty.
	pub(crate) fn advance(&mut self, next: S) {
		if self.order == 0 {
			return;
		}
		if self.buffer.len() == self.order * 2 {
			self.buffer.drain(..self.order);
		}
		self.buffer.push(next);
	}

	/// Current seed, oldest symbol first.
	pub(crate) fn as_slice(&self) -> &[S] {
		let start = self.buffer.len().saturating_sub(self.order);
		&self.buffer[start..]
	}
}
