//! Errors that can occur while loading macro files.
//!
//! Expansion itself never fails, so the only errors in this crate come from reading and parsing macro files.

use std::path::PathBuf;

/// An error that can occur while loading a macro file.
#[derive(Debug)]
pub enum LoadError {
	/// The macro file could not be read.
	Io(Io),

	/// The macro file is not a valid JSON object of strings.
	#[cfg(feature = "json")]
	Json(serde_json::Error),

	/// The macro file is not a valid TOML table of strings.
	#[cfg(feature = "toml")]
	Toml(toml::de::Error),

	/// The macro file is not a valid YAML mapping of strings.
	#[cfg(feature = "yaml")]
	Yaml(serde_yaml::Error),

	/// The format of the macro file could not be determined from its extension.
	UnsupportedFormat(UnsupportedFormat),
}

/// The macro file could not be read.
#[derive(Debug)]
pub struct Io {
	/// The path of the macro file.
	pub path: PathBuf,

	/// The underlying I/O error.
	pub source: std::io::Error,
}

impl std::error::Error for Io {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.source)
	}
}

impl std::fmt::Display for Io {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Failed to read {}: {}", self.path.display(), self.source)
	}
}

/// The format of the macro file could not be determined from its extension.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnsupportedFormat {
	/// The path of the macro file.
	pub path: PathBuf,
}

impl std::error::Error for UnsupportedFormat {}

impl std::fmt::Display for UnsupportedFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Unsupported macro file format: {}", self.path.display())?;
		let mut formats = Vec::new();
		if cfg!(feature = "json") {
			formats.push(".json");
		}
		if cfg!(feature = "toml") {
			formats.push(".toml");
		}
		if cfg!(feature = "yaml") {
			formats.push(".yaml, .yml");
		}
		write!(f, ", expected one of: {}", formats.join(", "))
	}
}

impl From<Io> for LoadError {
	#[inline]
	fn from(other: Io) -> Self {
		Self::Io(other)
	}
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for LoadError {
	#[inline]
	fn from(other: serde_json::Error) -> Self {
		Self::Json(other)
	}
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for LoadError {
	#[inline]
	fn from(other: toml::de::Error) -> Self {
		Self::Toml(other)
	}
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for LoadError {
	#[inline]
	fn from(other: serde_yaml::Error) -> Self {
		Self::Yaml(other)
	}
}

impl From<UnsupportedFormat> for LoadError {
	#[inline]
	fn from(other: UnsupportedFormat) -> Self {
		Self::UnsupportedFormat(other)
	}
}

impl std::error::Error for LoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(&e.source),
			#[cfg(feature = "json")]
			Self::Json(e) => Some(e),
			#[cfg(feature = "toml")]
			Self::Toml(e) => Some(e),
			#[cfg(feature = "yaml")]
			Self::Yaml(e) => Some(e),
			Self::UnsupportedFormat(_) => None,
		}
	}
}

impl std::fmt::Display for LoadError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Io(e) => std::fmt::Display::fmt(e, f),
			#[cfg(feature = "json")]
			Self::Json(e) => write!(f, "Invalid JSON macro file: {e}"),
			#[cfg(feature = "toml")]
			Self::Toml(e) => write!(f, "Invalid TOML macro file: {e}"),
			#[cfg(feature = "yaml")]
			Self::Yaml(e) => write!(f, "Invalid YAML macro file: {e}"),
			Self::UnsupportedFormat(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
