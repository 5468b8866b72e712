use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::MacroMap;

impl<'a, K, V, S> MacroMap<'a> for IndexMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: 'a,
	S: BuildHasher,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		IndexMap::get(self, key)
	}
}
