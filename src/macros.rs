//! Loading macro definitions from files.
//!
//! A macro file is a flat mapping from macro names to replacement strings, for example in JSON:
//!
//! ```json
//! {
//!   "name": "Ada",
//!   "count": "3"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{self, LoadError};

/// Macro definitions: a flat mapping from macro name to replacement text.
pub type Macros = BTreeMap<String, String>;

/// The format of a macro file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// A JSON object of strings.
	#[cfg(feature = "json")]
	Json,

	/// A TOML table of strings.
	#[cfg(feature = "toml")]
	Toml,

	/// A YAML mapping of strings.
	#[cfg(feature = "yaml")]
	Yaml,
}

impl Format {
	/// Determine the format of a macro file from the extension of its path.
	///
	/// Returns `None` if the extension is unknown, or if support for the format is not enabled.
	pub fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();
		match extension.as_str() {
			#[cfg(feature = "json")]
			"json" => Some(Self::Json),
			#[cfg(feature = "toml")]
			"toml" => Some(Self::Toml),
			#[cfg(feature = "yaml")]
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	/// Parse macro definitions in this format.
	pub fn parse(self, data: &str) -> Result<Macros, LoadError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Ok(crate::json::from_str(data)?),
			#[cfg(feature = "toml")]
			Self::Toml => Ok(crate::toml::from_str(data)?),
			#[cfg(feature = "yaml")]
			Self::Yaml => Ok(crate::yaml::from_str(data)?),
		}
	}
}

/// Load macro definitions from a file.
///
/// The format is chosen from the file extension: `.json`, `.toml`, or `.yaml`/`.yml`,
/// depending on which formats are enabled.
pub fn load(path: impl AsRef<Path>) -> Result<Macros, LoadError> {
	let path = path.as_ref();
	let format = Format::from_path(path).ok_or_else(|| error::UnsupportedFormat { path: path.to_owned() })?;
	let data = std::fs::read_to_string(path).map_err(|source| error::Io {
		path: path.to_owned(),
		source,
	})?;
	let macros = format.parse(&data)?;
	tracing::debug!(path = %path.display(), ?format, count = macros.len(), "loaded macro file");
	Ok(macros)
}

#[cfg(all(test, feature = "json", feature = "toml", feature = "yaml"))]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::{assert, let_assert};

	#[test]
	fn test_format_from_path() {
		assert!(Format::from_path(Path::new("macros.json")) == Some(Format::Json));
		assert!(Format::from_path(Path::new("dir/macros.JSON")) == Some(Format::Json));
		assert!(Format::from_path(Path::new("macros.toml")) == Some(Format::Toml));
		assert!(Format::from_path(Path::new("macros.yaml")) == Some(Format::Yaml));
		assert!(Format::from_path(Path::new("macros.yml")) == Some(Format::Yaml));
		assert!(Format::from_path(Path::new("macros.ini")) == None);
		assert!(Format::from_path(Path::new("macros")) == None);
	}

	#[test]
	fn test_load_json() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("macros.json");
		std::fs::write(&path, r#"{"name": "Ada", "count": "3"}"#).unwrap();

		let_assert!(Ok(macros) = load(&path));
		assert!(macros.len() == 2);
		assert!(macros["name"] == "Ada");
		assert!(macros["count"] == "3");
	}

	#[test]
	fn test_load_toml_and_yaml() {
		let dir = tempfile::tempdir().unwrap();

		let path = dir.path().join("macros.toml");
		std::fs::write(&path, "name = \"Ada\"\n").unwrap();
		let_assert!(Ok(macros) = load(&path));
		assert!(macros["name"] == "Ada");

		let path = dir.path().join("macros.yml");
		std::fs::write(&path, "name: Ada\n").unwrap();
		let_assert!(Ok(macros) = load(&path));
		assert!(macros["name"] == "Ada");
	}

	#[test]
	fn test_load_errors() {
		let dir = tempfile::tempdir().unwrap();

		let_assert!(Err(LoadError::Io(e)) = load(dir.path().join("missing.json")));
		assert!(e.source.kind() == std::io::ErrorKind::NotFound);

		let path = dir.path().join("macros.ini");
		std::fs::write(&path, "name = Ada\n").unwrap();
		let_assert!(Err(LoadError::UnsupportedFormat(e)) = load(&path));
		assert!(e.path == path);

		let path = dir.path().join("bad.json");
		std::fs::write(&path, r#"{"count": 3}"#).unwrap();
		let_assert!(Err(LoadError::Json(_)) = load(&path));
	}
}
