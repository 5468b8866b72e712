//! Support for macro files and macro expansion in JSON data.

use crate::macros::Macros;
use crate::Resolver;

/// Parse macro definitions from a JSON object of strings.
///
/// Any value that is not a string is rejected.
pub fn from_str(data: &str) -> Result<Macros, serde_json::Error> {
	serde_json::from_str(data)
}

/// Parse macro definitions from a JSON object of strings.
///
/// Any value that is not a string is rejected.
pub fn from_slice(data: &[u8]) -> Result<Macros, serde_json::Error> {
	serde_json::from_slice(data)
}

/// Expand macro references in all string values of a JSON value.
///
/// Object keys are left untouched.
pub fn expand_string_values<'a, R>(value: &mut serde_json::Value, resolver: &'a R)
where
	R: Resolver<'a> + ?Sized,
	R::Value: AsRef<str>,
{
	visit_string_values(value, &mut |value| {
		*value = crate::expand(value, resolver);
	})
}

/// Recursively apply a function to all string values in a JSON value.
fn visit_string_values<F>(value: &mut serde_json::Value, fun: &mut F)
where
	F: FnMut(&mut String),
{
	match value {
		serde_json::Value::Null => (),
		serde_json::Value::Bool(_) => (),
		serde_json::Value::Number(_) => (),
		serde_json::Value::String(val) => fun(val),
		serde_json::Value::Array(seq) => {
			for value in seq {
				visit_string_values(value, fun);
			}
		},
		serde_json::Value::Object(map) => {
			for value in map.values_mut() {
				visit_string_values(value, fun);
			}
		},
	}
}
