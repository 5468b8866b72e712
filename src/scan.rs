//! Single-pass scanning of a source text for `${...}` references.

use std::ops::Range;

use crate::reference;

/// One piece of a scanned source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
	/// A literal run to be copied verbatim from the source.
	Literal(Range<usize>),

	/// A reference to be replaced by the value of a variable.
	Reference(Span),
}

/// The location of a reference in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
	/// The range of the variable name in the source.
	///
	/// Used for look-up in the resolver.
	pub name: Range<usize>,

	/// The range of the whole reference in the source, starting at the dollar sign.
	pub range: Range<usize>,
}

/// Iterator over the [`Part`]s of a source text.
///
/// Only the braced form `${...}` is recognized while scanning.
/// A dollar sign followed by anything else, or a `${` in the last two bytes of the source, is literal text.
///
/// Empty literal runs are not reported.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	/// The full source text.
	source: &'a [u8],

	/// The start of the pending literal run.
	literal_start: usize,

	/// A reference found after a literal run that has not been yielded yet.
	pending: Option<Span>,

	/// Set when the trailing literal has been yielded.
	done: bool,
}

impl<'a> Scanner<'a> {
	/// Create a new scanner for the given source.
	#[inline]
	pub fn new(source: &'a [u8]) -> Self {
		Self {
			source,
			literal_start: 0,
			pending: None,
			done: false,
		}
	}
}

impl Iterator for Scanner<'_> {
	type Item = Part;

	fn next(&mut self) -> Option<Part> {
		if let Some(span) = self.pending.take() {
			return Some(Part::Reference(span));
		}

		if self.done {
			return None;
		}

		let Some(dollar) = find_trigger(self.source, self.literal_start) else {
			self.done = true;
			let literal = self.literal_start..self.source.len();
			return (!literal.is_empty()).then_some(Part::Literal(literal));
		};

		let suffix_start = dollar + 1;
		let reference = reference::identify(&self.source[suffix_start..]);
		let end = suffix_start + reference.len;
		let span = Span {
			name: suffix_start + reference.name.start..suffix_start + reference.name.end,
			range: dollar..end,
		};

		let literal = self.literal_start..dollar;
		self.literal_start = end;
		if literal.is_empty() {
			Some(Part::Reference(span))
		} else {
			self.pending = Some(span);
			Some(Part::Literal(literal))
		}
	}
}

/// Find the position of the next `${` that starts a reference.
///
/// A trigger needs at least one more byte after the opening brace.
fn find_trigger(source: &[u8], start: usize) -> Option<usize> {
	let mut finger = start;
	while finger < source.len() {
		let dollar = finger + memchr::memchr(b'$', &source[finger..])?;
		if dollar + 2 < source.len() && source[dollar + 1] == b'{' {
			return Some(dollar);
		}
		finger = dollar + 1;
	}
	None
}
