use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ModelResult;
use crate::io::{read_source, write_output};
use super::config::WriterConfig;
use super::generator::generate;
use super::symbol::Symbol;
use super::table::TransitionTable;

/// A generation session: one source, the table built from it, and its settings.
///
/// The source is loaded once and never changes; loading another source means
/// building a new `RandomWriter`, the table is never updated in place.
///
/// # Responsibilities
/// - Tokenize the source text in the unit of `S`
/// - Apply the short-source policy, then build the transition table
/// - Generate symbols or text, and write text to a file
#[derive(Debug, Clone)]
pub struct RandomWriter<S> {
	config: WriterConfig,
	source: Vec<S>,
	table: TransitionTable<S>,
}

impl<S: Symbol> RandomWriter<S> {
	/// Builds a session from an in-memory text.
	///
	/// `config.unit` is overwritten with the unit of `S`.
	///
	/// # Errors
	/// Returns `InsufficientSource` if the text is too short for the order and
	/// the configuration rejects short sources.
	pub fn from_text(text: &str, mut config: WriterConfig) -> ModelResult<Self> {
		config.unit = S::UNIT;
		let source = S::tokenize(text);
		config.check_source_len(source.len())?;

		let table = config.builder().build(&source);
		log::info!(
			"analysed {} {} at order {}: {} seeds",
			source.len(),
			S::UNIT,
			config.order(),
			table.len()
		);
		Ok(Self { config, source, table })
	}

	/// Builds a session from a text file.
	///
	/// # Errors
	/// Returns `Io` if the file cannot be read, or any error of `from_text`.
	pub fn from_file<P: AsRef<Path>>(filename: P, config: WriterConfig) -> ModelResult<Self> {
		let filename = filename.as_ref();
		log::debug!("reading source {}", filename.display());
		let text = read_source(filename)?;
		Self::from_text(&text, config)
	}

	pub fn config(&self) -> &WriterConfig {
		&self.config
	}

	pub fn source(&self) -> &[S] {
		&self.source
	}

	pub fn table(&self) -> &TransitionTable<S> {
		&self.table
	}

	/// Generates `length` symbols with the given random source.
	///
	/// # Notes
	/// - A source accepted under `ShortSourcePolicy::Empty` has an empty
	///   table and always yields an empty output.
	pub fn generate_symbols<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> ModelResult<Vec<S>> {
		if self.table.is_empty() {
			log::warn!("transition table is empty, nothing to generate");
			return Ok(Vec::new());
		}
		generate(&self.table, &self.source, length, rng)
	}

	/// Generates `length` symbols and renders them as text.
	pub fn generate_text<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> ModelResult<String> {
		Ok(S::join(&self.generate_symbols(length, rng)?))
	}

	/// Generates text with the configured random source.
	///
	/// Uses `StdRng` seeded from `rng_seed` when set, the thread RNG otherwise.
	pub fn generate_text_with_config_rng(&self, length: usize) -> ModelResult<String> {
		match self.config.rng_seed {
			Some(seed) => self.generate_text(length, &mut StdRng::seed_from_u64(seed)),
			None => self.generate_text(length, &mut rand::rng()),
		}
	}

	/// Generates `length` symbols and writes them as text to `filename`.
	///
	/// # Errors
	/// Returns `Io` if the file cannot be written.
	pub fn write_text<P: AsRef<Path>>(&self, filename: P, length: usize) -> ModelResult<()> {
		let text = self.generate_text_with_config_rng(length)?;
		write_output(&filename, &text)?;
		log::info!("wrote {} {} to {}", length, S::UNIT, filename.as_ref().display());
		Ok(())
	}
}
