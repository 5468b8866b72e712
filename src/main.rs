//! Expand `${name}` macros in a file.
//!
//! # Usage
//!
//! ```bash
//! # Expand input.txt with the macros from macros.json, write to output.txt
//! macrosub -i input.txt -m macros.json -o output.txt
//!
//! # Read from stdin, write to stdout
//! cat input.txt | macrosub -m macros.toml
//! ```
//!
//! Macros that are not defined in the macro file are left in the output as `${name}`.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};

use macrosub::macros::{self, Macros};
use macrosub::{expand_bytes, from_fn, pass_through, Resolver};

#[derive(Parser)]
#[command(name = "macrosub")]
#[command(version)]
#[command(about = "Expand ${name} macros in a file using a JSON, TOML or YAML macro file")]
struct Options {
	/// Input file to be processed (reads stdin if not provided)
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// Macro file (.json, .toml, .yaml or .yml)
	#[arg(short, long, env = "MACROSUB_MACROS")]
	macros: PathBuf,

	/// Output file to be written (writes stdout if not provided)
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Log more details, can be repeated
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let options = Options::parse();
	init_logging(options.verbose);

	match run(&options) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{e:#}");
			ExitCode::FAILURE
		},
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => tracing::Level::WARN,
		1 => tracing::Level::INFO,
		2 => tracing::Level::DEBUG,
		_ => tracing::Level::TRACE,
	};
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env()
				.add_directive(level.into()),
		)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(options: &Options) -> Result<()> {
	let macros = macros::load(&options.macros)?;
	let input = read_input(options.input.as_ref())?;

	let (output, unresolved) = expand_with_report(&input, &macros);
	for name in &unresolved {
		warn!(name = %name, "macro is not defined, leaving the reference in place");
	}
	info!(
		input_bytes = input.len(),
		output_bytes = output.len(),
		unresolved = unresolved.len(),
		"expanded input"
	);

	write_output(options.output.as_ref(), &output)
}

/// Expand the input, collecting the distinct names that were not found in the macros.
fn expand_with_report(input: &[u8], macros: &Macros) -> (Vec<u8>, BTreeSet<String>) {
	let unresolved = RefCell::new(BTreeSet::new());
	let known = pass_through(macros);
	let resolver = from_fn(|name: &str| {
		let value = known.resolve(name);
		if !value.is_found() {
			unresolved.borrow_mut().insert(name.to_owned());
		}
		value
	});
	let output = expand_bytes(input, &resolver);
	(output, unresolved.into_inner())
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
	match path {
		Some(path) => {
			debug!(path = %path.display(), "reading input file");
			std::fs::read(path).with_context(|| format!("Failed to read input file {}", path.display()))
		},
		None => {
			debug!("reading input from stdin");
			let mut buffer = Vec::new();
			std::io::stdin()
				.read_to_end(&mut buffer)
				.context("Failed to read input from stdin")?;
			Ok(buffer)
		},
	}
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
	match path {
		Some(path) => {
			debug!(path = %path.display(), "writing output file");
			std::fs::write(path, data).with_context(|| format!("Failed to write output file {}", path.display()))
		},
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(data).context("Failed to write output to stdout")?;
			stdout.flush().context("Failed to write output to stdout")
		},
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::{assert, let_assert};

	#[test]
	fn test_expand_with_report() {
		let mut macros = Macros::new();
		macros.insert("name".into(), "Ada".into());

		let (output, unresolved) = expand_with_report(b"${name} ${a} ${b} ${a} $c", &macros);
		assert!(output == b"Ada ${a} ${b} ${a} $c");
		assert!(unresolved.into_iter().collect::<Vec<_>>() == ["a", "b"]);
	}

	#[test]
	fn test_cli_arguments() {
		let_assert!(Ok(options) = Options::try_parse_from(["macrosub", "-i", "in.txt", "-m", "macros.json", "-o", "out.txt", "-vv"]));
		assert!(options.input == Some(PathBuf::from("in.txt")));
		assert!(options.macros == PathBuf::from("macros.json"));
		assert!(options.output == Some(PathBuf::from("out.txt")));
		assert!(options.verbose == 2);
	}

	#[test]
	fn test_run_end_to_end() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("input.txt");
		let macro_file = dir.path().join("macros.json");
		let output = dir.path().join("output.txt");
		std::fs::write(&input, "Hello ${name}, you have ${count} items. Unknown: ${missing}").unwrap();
		std::fs::write(&macro_file, r#"{"name": "Ada", "count": "3"}"#).unwrap();

		let options = Options {
			input: Some(input),
			macros: macro_file,
			output: Some(output.clone()),
			verbose: 0,
		};
		let_assert!(Ok(()) = run(&options));
		let_assert!(Ok(written) = std::fs::read_to_string(&output));
		assert!(written == "Hello Ada, you have 3 items. Unknown: ${missing}");
	}

	#[test]
	fn test_run_fails_without_writing() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("input.txt");
		let output = dir.path().join("output.txt");
		std::fs::write(&input, "${name}").unwrap();

		let options = Options {
			input: Some(input),
			macros: dir.path().join("missing.json"),
			output: Some(output.clone()),
			verbose: 0,
		};
		let_assert!(Err(e) = run(&options));
		assert!(e.to_string().starts_with("Failed to read"));
		assert!(!output.exists());
	}
}
