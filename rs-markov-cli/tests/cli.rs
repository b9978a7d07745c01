use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use rs_markov_cli::{Cli, run};

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("rs-markov").chain(args.iter().copied())).unwrap()
}

fn write_source(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

fn out_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn writes_requested_number_of_characters() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "and.txt", "&&&&&&&&&&");
    let output = out_path(&dir, "and_out.txt");

    run(&cli(&[&input, &output, "3", "26"])).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "&".repeat(26));
}

#[test]
fn negative_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "in.txt", "abcdef");
    let output = out_path(&dir, "out.txt");

    let err = run(&cli(&[&input, &output, "-1", "10"])).unwrap_err();
    assert!(err.to_string().contains("(k) must be non-negative"), "{err:#}");

    let err = run(&cli(&[&input, &output, "1", "-10"])).unwrap_err();
    assert!(err.to_string().contains("length of output must be non-negative"), "{err:#}");
    assert!(!Path::new(&output).exists());
}

#[test]
fn non_numeric_arguments_fail_to_parse() {
    assert!(Cli::try_parse_from(["rs-markov", "in.txt", "out.txt", "two", "10"]).is_err());
    assert!(Cli::try_parse_from(["rs-markov", "in.txt", "out.txt", "2"]).is_err());
}

#[test]
fn missing_source_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = out_path(&dir, "missing.txt");
    let output = out_path(&dir, "out.txt");

    let err = run(&cli(&[&input, &output, "1", "10"])).unwrap_err();
    assert!(format!("{err:#}").contains("does not exist"));
}

#[test]
fn short_source_is_rejected_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "short.txt", "abc");
    let output = out_path(&dir, "out.txt");

    let err = run(&cli(&[&input, &output, "10", "5"])).unwrap_err();
    assert!(format!("{err:#}").contains("at least 11 characters"), "{err:#}");

    run(&cli(&[&input, &output, "10", "5", "--allow-short-source"])).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn word_unit_counts_words() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "words.txt", "go go go go\ngo go\n");
    let output = out_path(&dir, "out.txt");

    run(&cli(&[&input, &output, "2", "4", "--unit", "word"])).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "go go go go");

    let err = run(&cli(&[&input, &output, "6", "4", "--unit", "word"])).unwrap_err();
    assert!(format!("{err:#}").contains("at least 7 words"), "{err:#}");
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "in.txt", "she sells sea shells by the sea shore");
    let first = out_path(&dir, "first.txt");
    let second = out_path(&dir, "second.txt");

    run(&cli(&[&input, &first, "2", "300", "--seed", "42"])).unwrap();
    run(&cli(&[&input, &second, "2", "300", "--seed", "42"])).unwrap();

    let text = fs::read_to_string(&first).unwrap();
    assert_eq!(text, fs::read_to_string(&second).unwrap());
    assert_eq!(text.chars().count(), 300);
}

#[test]
fn table_dump_is_written() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "in.txt", "abab");
    let output = out_path(&dir, "out.txt");
    let dump = out_path(&dir, "table.json");

    run(&cli(&[&input, &output, "1", "5", "--dump-table", &dump, "--fold-case"])).unwrap();

    let json = fs::read_to_string(&dump).unwrap();
    assert!(json.contains("\"fold_case\": true"));
    assert!(json.contains("\"seed\": \"a\""));
    assert_eq!(fs::read_to_string(&output).unwrap().chars().count(), 5);
}
