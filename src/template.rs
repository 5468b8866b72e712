use crate::scan::{Part, Scanner};
use crate::Resolver;

/// A scanned string template that borrows the source string.
///
/// You can scan the template once and call [`Self::expand()`] multiple times.
/// This is generally more efficient than calling [`expand()`][crate::expand] multiple times on the same string.
///
/// Expanding a template gives exactly the same output as calling [`expand()`][crate::expand] on its source.
#[derive(Clone)]
pub struct Template<'a> {
	source: &'a str,
	parts: Vec<Part>,
}

impl std::fmt::Debug for Template<'_> {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Template").field(&self.source).finish()
	}
}

impl PartialEq for Template<'_> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl Eq for Template<'_> {}

impl<'a> Template<'a> {
	/// Scan a template from a string slice.
	///
	/// Scanning never fails: malformed references are handled the same way as by [`expand()`][crate::expand].
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			parts: Scanner::new(source.as_bytes()).collect(),
		}
	}

	/// Get the original source string.
	#[inline]
	pub fn source(&self) -> &'a str {
		self.source
	}

	/// Iterate over the names of all references in the template, in order of appearance.
	///
	/// A name that is referenced multiple times is reported multiple times.
	///
	/// # Example
	/// ```
	/// # use macrosub::Template;
	/// let template = Template::new("${greeting}, ${name}! $ignored ${name}");
	/// let names: Vec<_> = template.names().collect();
	/// assert_eq!(names, ["greeting", "name", "name"]);
	/// ```
	pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
		let source = self.source;
		self.parts.iter().filter_map(move |part| match part {
			Part::Literal(_) => None,
			Part::Reference(span) => Some(&source[span.name.clone()]),
		})
	}

	/// Expand the template.
	///
	/// This will replace all references in the template with the values from the given resolver.
	pub fn expand<'b, R>(&self, resolver: &'b R) -> String
	where
		R: Resolver<'b> + ?Sized,
		R::Value: AsRef<str>,
	{
		let mut output = String::with_capacity(2 * self.source.len());
		for part in &self.parts {
			match part {
				Part::Literal(range) => output.push_str(&self.source[range.clone()]),
				Part::Reference(span) => {
					let value = resolver.resolve(&self.source[span.name.clone()]);
					output.push_str(value.as_ref());
				},
			}
		}
		output
	}
}

impl<'a> From<&'a str> for Template<'a> {
	#[inline]
	fn from(source: &'a str) -> Self {
		Self::new(source)
	}
}
