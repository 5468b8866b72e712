//! Single-pass shell-style macro expansion for strings and byte strings.
//!
//! # Features
//!
//! * Expand `${name}` references in `&str` or in `&[u8]`.
//! * Special single-character names: `${*}`, `${#}`, `${$}`, `${@}`, `${!}`, `${?}` and `${0}` to `${9}`.
//! * Provide replacement text with any [`Resolver`]: a closure, a map, the environment or a combination.
//! * Keep unknown macros visible with [`pass_through()`].
//! * Load macro files in JSON, TOML or YAML (optional, requires the `json`, `toml` or `yaml` feature).
//!
//! Expansion is a single left-to-right pass.
//! Replacement text is never expanded again, braces do not nest,
//! and a bare `$name` is copied to the output unchanged.
//! Expansion never fails: malformed references degrade to well-defined output.
//!
//! # Examples
//!
//! The [`expand()`][expand] function can be used to perform expansion on a `&str`.
//!
//! ```
//! # use std::collections::HashMap;
//! let mut macros = HashMap::new();
//! macros.insert("name", "Ada");
//! macros.insert("count", "3");
//! assert_eq!(
//!   macrosub::expand("Hello ${name}, you have ${count} items. Unknown: ${missing}", &macrosub::pass_through(&macros)),
//!   "Hello Ada, you have 3 items. Unknown: ${missing}",
//! );
//! ```
//!
//! Any closure can be used as resolver with [`from_fn()`].
//!
//! ```
//! let numbered = macrosub::from_fn(|name: &str| format!("<{name}>"));
//! assert_eq!(macrosub::expand("${1} $2 ${*}", &numbered), "<1> $2 <*>");
//! ```
//!
//! Expansion can also be done on byte strings using the [`expand_bytes()`][expand_bytes] function.
//!
//! ```
//! let macros = [("name", b"world")];
//! assert_eq!(macrosub::expand_bytes(b"Hello ${name}!\xff", &macrosub::pass_through(macros)), b"Hello world!\xff");
//! ```
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod reference;
pub mod scan;

mod map;
pub use map::*;

mod resolve;
pub use resolve::*;

mod template;
pub use template::*;

#[cfg(any(feature = "json", feature = "toml", feature = "yaml"))]
pub mod error;

#[cfg(any(feature = "json", feature = "toml", feature = "yaml"))]
#[cfg_attr(feature = "doc-cfg", doc(cfg(any(feature = "json", feature = "toml", feature = "yaml"))))]
pub mod macros;

mod features;
#[allow(unused_imports)]
pub use features::*;

use scan::{Part, Scanner};

/// Expand macro references in a string.
///
/// References have the form `${name}`, where the name is everything up to the first closing brace.
/// Every reference is replaced by the value that `resolver` gives for its name,
/// and all other text is copied verbatim.
///
/// Edge cases are resolved, not reported:
///
/// * `${}` resolves the empty name.
/// * `${` without any closing brace resolves the empty name, and the text after the brace is scanned as usual.
/// * `$` or `${` at the very end of the input is copied as-is.
/// * A `$` not followed by `{` is copied as-is, so `$name` and `$*` are not expanded.
///
/// The resolver is called once per reference, from left to right.
/// Its output is not scanned again.
///
/// You can pass any [`Resolver`] whose value is [`AsRef<str>`], such as [`from_fn()`] or [`pass_through()`].
pub fn expand<'a, R>(source: &str, resolver: &'a R) -> String
where
	R: Resolver<'a> + ?Sized,
	R::Value: AsRef<str>,
{
	let mut output = String::with_capacity(2 * source.len());
	for part in Scanner::new(source.as_bytes()) {
		match part {
			// Part boundaries always sit next to ASCII characters, so slicing can not split a code point.
			Part::Literal(range) => output.push_str(&source[range]),
			Part::Reference(span) => {
				let value = resolver.resolve(&source[span.name]);
				output.push_str(value.as_ref());
			},
		}
	}
	output
}

/// Expand macro references in a byte string.
///
/// This works exactly like [`expand()`], except that the source and the replacement values are bytes.
/// Non-ASCII and invalid UTF-8 data is copied through unchanged.
///
/// Names are passed to the resolver as `&str`.
/// A name that is not valid UTF-8 is converted lossily, with invalid sequences replaced by `U+FFFD`.
pub fn expand_bytes<'a, R>(source: &[u8], resolver: &'a R) -> Vec<u8>
where
	R: Resolver<'a> + ?Sized,
	R::Value: AsRef<[u8]>,
{
	let mut output = Vec::with_capacity(2 * source.len());
	for part in Scanner::new(source) {
		match part {
			Part::Literal(range) => output.extend_from_slice(&source[range]),
			Part::Reference(span) => {
				let name = String::from_utf8_lossy(&source[span.name]);
				let value = resolver.resolve(&name);
				output.extend_from_slice(value.as_ref());
			},
		}
	}
	output
}
