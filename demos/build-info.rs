//! Print build information, mixing runtime environment variables with values fixed at compile time.
//!
//! Runtime variables win, so `CARGO_PKG_NAME=other cargo run --example build-info` overrides the package name.
use macrosub::{fallback, map_value, pass_through, Env, Template};

static BUILD_ENV: &[(&str, &str)] = &[
	("CARGO_PKG_NAME", env!("CARGO_PKG_NAME")),
	("CARGO_PKG_VERSION", env!("CARGO_PKG_VERSION")),
	("CARGO_PKG_DESCRIPTION", env!("CARGO_PKG_DESCRIPTION")),
	("CARGO_CRATE_NAME", env!("CARGO_CRATE_NAME")),
];

const REPORT: &str = "\
${CARGO_PKG_NAME} ${CARGO_PKG_VERSION}: ${CARGO_PKG_DESCRIPTION}
crate:  ${CARGO_CRATE_NAME}
user:   ${USER}
shell:  ${SHELL}
prices: $5 and ${5} stay untouched unless defined
";

fn main() {
	let template = Template::new(REPORT);

	println!("Using only the runtime environment:");
	println!("{}", template.expand(&pass_through(Env)));

	println!("Using only the build environment:");
	println!("{}", template.expand(&pass_through(BUILD_ENV)));

	// `Env` gives `String`s and `BUILD_ENV` gives `&&str`, so convert the latter before layering.
	let merged = fallback(Env, map_value(BUILD_ENV, |value| (*value).to_owned()));
	println!("Using the runtime environment, falling back to the build environment:");
	println!("{}", template.expand(&pass_through(merged)));
}
