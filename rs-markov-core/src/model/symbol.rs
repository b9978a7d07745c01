use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit of analysis selected for a session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolUnit {
	/// Every character of the source (whitespace and newlines included).
	#[default]
	Char,
	/// Whitespace-delimited words.
	Word,
}

impl fmt::Display for SymbolUnit {
	/// Plural form, used when counting symbols in messages.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SymbolUnit::Char => write!(f, "characters"),
			SymbolUnit::Word => write!(f, "words"),
		}
	}
}

impl FromStr for SymbolUnit {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"char" | "chars" | "character" | "characters" => Ok(SymbolUnit::Char),
			"word" | "words" => Ok(SymbolUnit::Word),
			other => Err(format!("Unknown symbol unit '{other}', expected 'char' or 'word'")),
		}
	}
}

/// Atomic unit modelled by the transition table.
///
/// Symbols are compared by value, so two seeds with the same content are the
/// same key wherever they occur in the source.
///
/// # Responsibilities
/// - Split a text into a flat symbol sequence (`tokenize`)
/// - Render a symbol sequence back into text (`join`)
/// - Provide a canonical lower-case form for case-insensitive lookups (`fold`)
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {
	/// Unit this implementation models.
	const UNIT: SymbolUnit;

	/// Splits `text` into its symbols, in source order.
	fn tokenize(text: &str) -> Vec<Self>;

	/// Renders a symbol sequence as text.
	fn join(symbols: &[Self]) -> String;

	/// Returns the canonical (lower-case) form of this symbol.
	fn fold(&self) -> Self;
}

impl Symbol for char {
	const UNIT: SymbolUnit = SymbolUnit::Char;

	fn tokenize(text: &str) -> Vec<Self> {
		text.chars().collect()
	}

	fn join(symbols: &[Self]) -> String {
		symbols.iter().collect()
	}

	/// Lower-cases the character.
	///
	/// # Notes
	/// - Characters whose lower case expands to several characters keep the
	///   first one, so a folded seed always has exactly `k` symbols.
	fn fold(&self) -> Self {
		self.to_lowercase().next().unwrap_or(*self)
	}
}

impl Symbol for String {
	const UNIT: SymbolUnit = SymbolUnit::Word;

	fn tokenize(text: &str) -> Vec<Self> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	fn join(symbols: &[Self]) -> String {
		symbols.join(" ")
	}

	fn fold(&self) -> Self {
		self.to_lowercase()
	}
}
