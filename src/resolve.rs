//! Resolvers turn a macro name into its replacement text.
//!
//! The expansion functions accept any [`Resolver`].
//! Use [`from_fn()`] to wrap a closure, or [`pass_through()`] to wrap a [`MacroMap`]
//! so that unknown macros are left in the output as `${name}`.

use crate::MacroMap;

/// Trait for types that give the replacement text for a macro name.
///
/// A resolver is total: it must produce a value for every name, including the empty name.
/// During expansion it is called once per reference, in the order the references appear.
pub trait Resolver<'a> {
	/// The type returned by the [`resolve()`][Self::resolve] function.
	type Value;

	/// Get the replacement text for a name.
	fn resolve(&'a self, name: &str) -> Self::Value;
}

impl<'a, T> Resolver<'a> for &'_ T
where
	T: ?Sized + Resolver<'a>,
{
	type Value = <T as Resolver<'a>>::Value;

	#[inline(always)]
	fn resolve(&'a self, name: &str) -> Self::Value {
		T::resolve(self, name)
	}
}

impl<'a, T> Resolver<'a> for &'_ mut T
where
	T: ?Sized + Resolver<'a>,
{
	type Value = <T as Resolver<'a>>::Value;

	#[inline(always)]
	fn resolve(&'a self, name: &str) -> Self::Value {
		T::resolve(self, name)
	}
}

impl<'a, T> Resolver<'a> for std::boxed::Box<T>
where
	T: ?Sized + Resolver<'a>,
{
	type Value = <T as Resolver<'a>>::Value;

	#[inline(always)]
	fn resolve(&'a self, name: &str) -> Self::Value {
		T::resolve(self, name)
	}
}

/// [`Resolver`] produced by [`from_fn()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FnResolver<F> {
	func: F,
}

impl<'a, F, V> Resolver<'a> for FnResolver<F>
where
	F: 'a + Fn(&str) -> V,
{
	type Value = V;

	#[inline(always)]
	fn resolve(&'a self, name: &str) -> Self::Value {
		(self.func)(name)
	}
}

/// Creates a [`Resolver`] that delegates to the given function.
///
/// # Example
/// ```rust
/// # use macrosub::{expand, from_fn};
/// let shout = from_fn(|name: &str| name.to_uppercase());
/// assert_eq!(expand("${hello}, ${world}!", &shout), "HELLO, WORLD!");
/// ```
pub const fn from_fn<F, V>(func: F) -> FnResolver<F>
where
	F: Fn(&str) -> V,
{
	FnResolver { func }
}

/// [`Resolver`] produced by [`pass_through()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassThrough<M> {
	map: M,
}

impl<M> PassThrough<M> {
	/// Get a reference to the wrapped map.
	#[inline]
	pub fn map(&self) -> &M {
		&self.map
	}

	/// Consume the resolver to get the wrapped map.
	#[inline]
	pub fn into_map(self) -> M {
		self.map
	}
}

impl<'a, M> Resolver<'a> for PassThrough<M>
where
	M: MacroMap<'a>,
{
	type Value = Resolved<M::Value>;

	fn resolve(&'a self, name: &str) -> Self::Value {
		match self.map.get(name) {
			Some(value) => Resolved::Found(value),
			None => Resolved::Missing(format!("${{{name}}}")),
		}
	}
}

/// Creates a [`Resolver`] that looks up names in a [`MacroMap`].
///
/// Names that are not in the map resolve to the reference itself, rebuilt as `${name}`,
/// so unknown macros stay visible in the output instead of disappearing.
///
/// # Example
/// ```rust
/// # use std::collections::BTreeMap;
/// # use macrosub::{expand, pass_through};
/// let mut macros = BTreeMap::new();
/// macros.insert("name", "Ada");
/// assert_eq!(expand("${name} and ${other}", &pass_through(&macros)), "Ada and ${other}");
/// ```
pub const fn pass_through<M>(map: M) -> PassThrough<M> {
	PassThrough { map }
}

/// Value produced by a [`PassThrough`] resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<V> {
	/// The name was found in the map.
	Found(V),

	/// The name was not found: the reference rebuilt as `${name}`.
	Missing(String),
}

impl<V> Resolved<V> {
	/// Check if the name was found in the map.
	#[inline]
	pub fn is_found(&self) -> bool {
		matches!(self, Self::Found(_))
	}
}

impl<V: AsRef<str>> AsRef<str> for Resolved<V> {
	#[inline]
	fn as_ref(&self) -> &str {
		match self {
			Self::Found(value) => value.as_ref(),
			Self::Missing(reference) => reference,
		}
	}
}

impl<V: AsRef<[u8]>> AsRef<[u8]> for Resolved<V> {
	#[inline]
	fn as_ref(&self) -> &[u8] {
		match self {
			Self::Found(value) => value.as_ref(),
			Self::Missing(reference) => reference.as_bytes(),
		}
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use std::collections::BTreeMap;

	use super::*;
	use crate::{fallback, map_value, Env};
	use assert2::{assert, check};

	#[test]
	fn test_from_fn() {
		let resolver = from_fn(|name: &str| format!("<{name}>"));
		check!(resolver.resolve("a") == "<a>");
		check!(resolver.resolve("") == "<>");
	}

	#[test]
	fn test_pass_through() {
		let mut macros: BTreeMap<String, String> = BTreeMap::new();
		macros.insert("name".into(), "Ada".into());
		let resolver = pass_through(&macros);

		let value = resolver.resolve("name");
		assert!(value.is_found());
		assert!(AsRef::<str>::as_ref(&value) == "Ada");

		let value = resolver.resolve("missing");
		assert!(!value.is_found());
		assert!(value == Resolved::Missing(String::from("${missing}")));

		check!(resolver.resolve("") == Resolved::Missing(String::from("${}")));
		check!(resolver.resolve("*") == Resolved::Missing(String::from("${*}")));
	}

	#[test]
	fn test_pass_through_bytes() {
		let macros = [("raw", b"\xff".to_vec())];
		let resolver = pass_through(macros);

		let found = resolver.resolve("raw");
		check!(AsRef::<[u8]>::as_ref(&found) == b"\xff");

		let missing = resolver.resolve("cooked");
		check!(AsRef::<[u8]>::as_ref(&missing) == b"${cooked}");
	}

	#[test]
	fn test_pass_through_fallback() {
		let macros = [("MACROSUB_TEST_NOT_IN_ENV", String::from("from map"))];
		let resolver = pass_through(fallback(Env, map_value(&macros, |value| value.clone())));

		let value = resolver.resolve("MACROSUB_TEST_NOT_IN_ENV");
		check!(value == Resolved::Found(String::from("from map")));
	}

	#[test]
	fn test_dyn_resolver() {
		let resolver = from_fn(|name: &str| name.len().to_string());
		let resolver: &dyn Resolver<Value = String> = &resolver;
		check!(resolver.resolve("four") == "4");
	}
}
