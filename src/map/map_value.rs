use super::MacroMap;

/// [`MacroMap`] produced by [`map_value()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapValue<M, F> {
	map: M,
	func: F,
}

impl<'a, M, F, V> MacroMap<'a> for MapValue<M, F>
where
	M: MacroMap<'a>,
	F: Fn(M::Value) -> V,
{
	type Value = V;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.map.get(key).map(&self.func)
	}
}

/// Creates a [`MacroMap`] that applies `func` to every value found in `map`.
///
/// This is mostly useful to give two maps the same value type before combining them with [`fallback()`][super::fallback].
///
/// # Example
/// ```rust
/// # use macrosub::{fallback, map_value, Env, MacroMap};
/// let defaults = [("EDITOR", "vi")];
/// let macros = fallback(Env, map_value(defaults, |value| value.to_string()));
///
/// assert!(macros.get("EDITOR").is_some());
/// ```
pub const fn map_value<'a, M, F, V>(map: M, func: F) -> MapValue<M, F>
where
	M: MacroMap<'a>,
	F: Fn(M::Value) -> V,
{
	MapValue { map, func }
}
