//! Support for macro files and macro expansion in TOML data.

use crate::macros::Macros;
use crate::Resolver;

/// Parse macro definitions from a TOML table of strings.
///
/// Any value that is not a string is rejected.
pub fn from_str(data: &str) -> Result<Macros, toml::de::Error> {
	toml::from_str(data)
}

/// Expand macro references in all string values of a TOML value.
///
/// Table keys, datetimes and other non-string values are left untouched.
pub fn expand_string_values<'a, R>(value: &mut toml::Value, resolver: &'a R)
where
	R: Resolver<'a> + ?Sized,
	R::Value: AsRef<str>,
{
	visit_string_values(value, &mut |value| {
		*value = crate::expand(value, resolver);
	})
}

/// Recursively apply a function to all string values in a TOML value.
fn visit_string_values<F>(value: &mut toml::Value, fun: &mut F)
where
	F: FnMut(&mut String),
{
	match value {
		toml::Value::Boolean(_) => (),
		toml::Value::Integer(_) => (),
		toml::Value::Float(_) => (),
		toml::Value::Datetime(_) => (),
		toml::Value::String(val) => fun(val),
		toml::Value::Array(seq) => {
			for value in seq {
				visit_string_values(value, fun);
			}
		},
		toml::Value::Table(map) => {
			for (_key, value) in map.iter_mut() {
				visit_string_values(value, fun);
			}
		},
	}
}
