//! Partial lookups from macro names to values.
//!
//! Unlike a [`Resolver`][crate::Resolver], a [`MacroMap`] is allowed to not know a name.
//! Wrap it in [`pass_through()`][crate::pass_through] to expand with it.
//!
//! Maps can be layered with [`fallback()`] and adapted with [`map_value()`].

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

mod fallback;
pub use fallback::*;

mod map_value;
pub use map_value::*;

/// Lookup of macro definitions by name.
///
/// The lifetime `'a` is the lifetime of the borrow of the map,
/// which lets maps hand out references to their values.
pub trait MacroMap<'a> {
	/// Value of a found macro.
	type Value;

	/// Look up a macro, returning `None` if it is not defined.
	fn get(&'a self, key: &str) -> Option<Self::Value>;
}

/// Macro definitions as a list of `(name, value)` pairs.
///
/// Lookups scan the list front to back, so the first definition of a name wins.
///
/// # Example
/// ```rust
/// # use macrosub::MacroMap;
/// let macros = [("name", "Ada"), ("count", "3"), ("name", "Grace")];
///
/// assert_eq!(macros.get("name"), Some(&"Ada"));
/// assert_eq!(macros.get("missing"), None);
/// ```
impl<'a, K, V> MacroMap<'a> for [(K, V)]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.iter()
			.find(|(name, _)| name.borrow() == key)
			.map(|(_, value)| value)
	}
}

impl<'a, K, V, const N: usize> MacroMap<'a> for [(K, V); N]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		MacroMap::get(self.as_slice(), key)
	}
}

impl<'a, K, V> MacroMap<'a> for Vec<(K, V)>
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		MacroMap::get(self.as_slice(), key)
	}
}

impl<'a, T> MacroMap<'a> for &'_ T
where
	T: ?Sized + MacroMap<'a>,
{
	type Value = T::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

impl<'a, T> MacroMap<'a> for Box<T>
where
	T: ?Sized + MacroMap<'a>,
{
	type Value = T::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

/// The environment of the current process.
///
/// Unset variables and variables that are not valid unicode are not defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl<'a> MacroMap<'a> for Env {
	type Value = String;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		std::env::var(key).ok()
	}
}

impl<'a, K, V> MacroMap<'a> for BTreeMap<K, V>
where
	K: Borrow<str> + Ord,
	V: 'a,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		BTreeMap::get(self, key)
	}
}

impl<'a, K, V, S> MacroMap<'a> for HashMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: 'a,
	S: BuildHasher,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		HashMap::get(self, key)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::check;

	#[test]
	fn test_std_maps() {
		let mut btree: BTreeMap<String, String> = BTreeMap::new();
		btree.insert("name".into(), "Ada".into());
		check!(MacroMap::get(&btree, "name") == Some(&String::from("Ada")));
		check!(MacroMap::get(&btree, "other") == None);

		let mut hash: HashMap<&str, &str> = HashMap::new();
		hash.insert("name", "Ada");
		check!(MacroMap::get(&hash, "name") == Some(&"Ada"));
		check!(MacroMap::get(&hash, "") == None);
	}

	#[test]
	fn test_pairs() {
		let pairs = vec![(String::from("a"), 1), (String::from("b"), 2), (String::from("a"), 3)];
		check!(MacroMap::get(&pairs, "a") == Some(&1));
		check!(MacroMap::get(&pairs, "b") == Some(&2));
		check!(MacroMap::get(&pairs, "c") == None);
	}

	#[test]
	fn test_boxed_and_dyn() {
		let boxed: Box<[(&str, i32); 1]> = Box::new([("x", 7)]);
		check!(MacroMap::get(&boxed, "x") == Some(&7));
		check!(MacroMap::get(&boxed, "y") == None);

		let array = [("x", 7)];
		let dynamic: &dyn MacroMap<Value = &i32> = &array;
		check!(dynamic.get("x") == Some(&7));
	}

	#[test]
	fn test_env() {
		check!(Env.get("MACROSUB_TEST_SURELY_NOT_SET") == None);
	}
}
