//! Recognition of a single variable reference.
//!
//! The functions in this module look at the text directly following a `$` sign
//! and decide which variable name it refers to and how many bytes the reference occupies.

use std::ops::Range;

/// A variable reference recognized by [`identify()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
	/// The range of the variable name within the examined suffix.
	///
	/// The range may be empty.
	pub name: Range<usize>,

	/// The number of bytes of the suffix consumed by the reference.
	pub len: usize,
}

impl Reference {
	/// Get the name of the reference from the suffix it was identified in.
	///
	/// # Panics
	/// May panic if `suffix` is not the data that was passed to [`identify()`].
	#[inline]
	pub fn name_in<'a>(&self, suffix: &'a [u8]) -> &'a [u8] {
		&suffix[self.name.clone()]
	}
}

/// Identify the variable reference at the start of `suffix`.
///
/// The suffix must be the data directly after a `$` sign.
/// A reference can take one of these forms:
///
/// * `{c}` where `c` is a special character (see [`is_special()`]),
/// * `{name}` where `name` is anything up to the first closing brace,
/// * `c` where `c` is a special character,
/// * `name` where `name` is a run of ASCII letters, digits and underscores.
///
/// An opening brace without any closing brace yields an empty name
/// that consumes only the opening brace.
///
/// This function never fails: any input, including an empty suffix, gives a well-defined reference.
///
/// # Example
/// ```
/// # use macrosub::reference::identify;
/// let reference = identify(b"{HOME}/.config");
/// assert_eq!(reference.name, 1..5);
/// assert_eq!(reference.len, 6);
/// ```
pub fn identify(suffix: &[u8]) -> Reference {
	match suffix.first().copied() {
		None => Reference { name: 0..0, len: 0 },
		Some(b'{') => identify_braced(suffix),
		Some(c) if is_special(c) => Reference { name: 0..1, len: 1 },
		Some(_) => {
			let end = suffix.iter().position(|&c| !is_name_char(c)).unwrap_or(suffix.len());
			Reference { name: 0..end, len: end }
		},
	}
}

/// Identify a reference in the braced form.
///
/// The first byte of `suffix` must be the opening brace.
fn identify_braced(suffix: &[u8]) -> Reference {
	if suffix.len() > 2 && is_special(suffix[1]) && suffix[2] == b'}' {
		return Reference { name: 1..2, len: 3 };
	}

	match memchr::memchr(b'}', &suffix[1..]) {
		Some(offset) => {
			let close = offset + 1;
			Reference {
				name: 1..close,
				len: close + 1,
			}
		},
		// Unterminated: only the brace itself is consumed.
		None => Reference { name: 0..0, len: 1 },
	}
}

/// Identify the variable reference at the start of a string suffix.
///
/// Returns the name and the number of bytes consumed.
/// See [`identify()`] for the accepted forms.
///
/// # Example
/// ```
/// # use macrosub::reference::identify_str;
/// assert_eq!(identify_str("{*}"), ("*", 3));
/// assert_eq!(identify_str("user_name!"), ("user_name", 9));
/// assert_eq!(identify_str("{oops"), ("", 1));
/// ```
pub fn identify_str(suffix: &str) -> (&str, usize) {
	let reference = identify(suffix.as_bytes());
	// Name boundaries always sit next to ASCII bytes or at the ends of the suffix.
	(&suffix[reference.name], reference.len)
}

/// Check if a byte identifies a special shell variable such as `$*` or `$1`.
#[inline]
pub fn is_special(c: u8) -> bool {
	matches!(c, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'0'..=b'9')
}

/// Check if a byte can be part of a bare variable name.
#[inline]
pub fn is_name_char(c: u8) -> bool {
	c.is_ascii_alphanumeric() || c == b'_'
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::{assert, check};

	#[test]
	fn test_braced_special() {
		for c in "*#$@!?0123456789".bytes() {
			let suffix = [b'{', c, b'}', b'x'];
			check!(identify(&suffix) == Reference { name: 1..2, len: 3 });
		}
		check!(identify_str("{$}") == ("$", 3));
	}

	#[test]
	fn test_braced_name() {
		check!(identify_str("{foo}") == ("foo", 5));
		check!(identify_str("{foo}bar}") == ("foo", 5));
		check!(identify_str("{}") == ("", 2));
		check!(identify_str("{a b-c}") == ("a b-c", 7));
		check!(identify_str("{12}") == ("12", 4));
		check!(identify_str("{**}") == ("**", 4));
		check!(identify_str("{a${b}") == ("a${b", 6));
		check!(identify_str("{❤}") == ("❤", 5));
	}

	#[test]
	fn test_braced_unterminated() {
		check!(identify_str("{") == ("", 1));
		check!(identify_str("{*") == ("", 1));
		check!(identify_str("{unterminated") == ("", 1));
		check!(identify_str("{x ${y") == ("", 1));
	}

	#[test]
	fn test_bare_special() {
		check!(identify_str("*") == ("*", 1));
		check!(identify_str("1abc") == ("1", 1));
		check!(identify_str("$$") == ("$", 1));
		check!(identify_str("?") == ("?", 1));
	}

	#[test]
	fn test_bare_name() {
		check!(identify_str("name") == ("name", 4));
		check!(identify_str("name!") == ("name", 4));
		check!(identify_str("a_B9-x") == ("a_B9", 4));
		check!(identify_str("_") == ("_", 1));
		check!(identify_str("-name") == ("", 0));
		check!(identify_str("}") == ("", 0));
		check!(identify_str("❤") == ("", 0));
	}

	#[test]
	fn test_empty_suffix() {
		assert!(identify(b"") == Reference { name: 0..0, len: 0 });
		assert!(identify_str("") == ("", 0));
	}

	#[test]
	fn test_name_in() {
		let suffix = b"{abc}def";
		let reference = identify(suffix);
		assert!(reference.name_in(suffix) == b"abc");

		let suffix = b"{\xff\xfe}";
		let reference = identify(suffix);
		assert!(reference.name_in(suffix) == b"\xff\xfe");
	}
}
