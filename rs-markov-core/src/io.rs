use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::io;

/// Reads a text file for analysis.
///
/// - Reads the entire file into memory
/// - Normalizes line endings (`\r\n` becomes `\n`)
pub fn read_source<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(normalize_line_endings(&contents))
}

/// Writes generated text to `filename`, replacing any previous content.
pub fn write_output<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<()> {
	let mut file = File::create(filename)?;
	file.write_all(text.as_bytes())?;
	file.flush()
}

/// Checks that `path` is an existing, readable file.
pub fn check_readable<P: AsRef<Path>>(path: P) -> io::Result<()> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			format!("source file {} does not exist", path.display()),
		));
	}
	if !path.is_file() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("source {} is not a file", path.display()),
		));
	}
	File::open(path).map(|_| ()).map_err(|e| {
		io::Error::new(e.kind(), format!("source file {} is not readable: {e}", path.display()))
	})
}

/// Checks that `path` can be written, creating it when absent.
///
/// An existing file is opened for writing but not truncated.
pub fn check_writable<P: AsRef<Path>>(path: P) -> io::Result<()> {
	let path = path.as_ref();
	if path.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("result {} is a directory", path.display()),
		));
	}
	OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(false)
		.open(path)
		.map(|_| ())
		.map_err(|e| {
			io::Error::new(e.kind(), format!("result file {} cannot be written: {e}", path.display()))
		})
}

fn normalize_line_endings(contents: &str) -> String {
	contents.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_endings_are_normalized() {
		assert_eq!(normalize_line_endings("a\r\nb\nc"), "a\nb\nc");
		assert_eq!(normalize_line_endings("abc\r\n"), "abc\n");
		assert_eq!(normalize_line_endings(""), "");
	}

	#[test]
	fn missing_source_is_reported() {
		let err = check_readable("definitely/not/here.txt").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
		assert!(err.to_string().contains("does not exist"));
	}
}
