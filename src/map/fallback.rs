use super::MacroMap;

/// Two layered maps, see [`fallback()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fallback<First, Second> {
	first: First,
	second: Second,
}

impl<First, Second> Fallback<First, Second> {
	/// Split the layers again.
	pub fn into_inner(self) -> (First, Second) {
		(self.first, self.second)
	}
}

impl<'a, First, Second, V> MacroMap<'a> for Fallback<First, Second>
where
	First: MacroMap<'a, Value = V>,
	Second: MacroMap<'a, Value = V>,
{
	type Value = V;

	fn get(&'a self, key: &str) -> Option<V> {
		match self.first.get(key) {
			Some(value) => Some(value),
			None => self.second.get(key),
		}
	}
}

/// Layer two macro maps: names defined in `first` shadow the ones in `second`.
///
/// Both layers must give the same value type, use [`map_value()`][super::map_value] to convert one of them.
/// Layers can be nested to stack more than two maps.
///
/// # Example
/// ```rust
/// # use macrosub::{expand, fallback, pass_through};
/// let project = [("name", "macrosub")];
/// let defaults = [("name", "unnamed"), ("license", "BSD-2-Clause")];
/// let macros = pass_through(fallback(project, defaults));
///
/// assert_eq!(expand("${name} (${license}, ${author})", &macros), "macrosub (BSD-2-Clause, ${author})");
/// ```
pub const fn fallback<First, Second>(first: First, second: Second) -> Fallback<First, Second> {
	Fallback { first, second }
}
