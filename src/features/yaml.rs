//! Support for macro files and macro expansion in YAML data.

use crate::macros::Macros;
use crate::Resolver;

/// Parse macro definitions from a YAML mapping of strings.
///
/// Any value that is not a string is rejected.
pub fn from_str(data: &str) -> Result<Macros, serde_yaml::Error> {
	serde_yaml::from_str(data)
}

/// Parse macro definitions from a YAML mapping of strings.
///
/// Any value that is not a string is rejected.
pub fn from_slice(data: &[u8]) -> Result<Macros, serde_yaml::Error> {
	serde_yaml::from_slice(data)
}

/// Expand macro references in all string values of a YAML value.
///
/// Mapping keys are left untouched.
pub fn expand_string_values<'a, R>(value: &mut serde_yaml::Value, resolver: &'a R)
where
	R: Resolver<'a> + ?Sized,
	R::Value: AsRef<str>,
{
	visit_string_values(value, &mut |value| {
		*value = crate::expand(value, resolver);
	})
}

/// Recursively apply a function to all string values in a YAML value.
fn visit_string_values<F>(value: &mut serde_yaml::Value, fun: &mut F)
where
	F: FnMut(&mut String),
{
	match value {
		serde_yaml::Value::Null => (),
		serde_yaml::Value::Bool(_) => (),
		serde_yaml::Value::Number(_) => (),
		serde_yaml::Value::String(val) => fun(val),
		serde_yaml::Value::Tagged(tagged) => visit_string_values(&mut tagged.value, fun),
		serde_yaml::Value::Sequence(seq) => {
			for value in seq {
				visit_string_values(value, fun);
			}
		},
		serde_yaml::Value::Mapping(map) => {
			for (_key, value) in map.iter_mut() {
				visit_string_values(value, fun);
			}
		},
	}
}
