//! Quoting options
//!
//! Options are plain data with serde defaults, so an empty TOML document
//! yields the behavior of `Code.string_to_quoted/1` with no options.
//!
//! ```toml
//! columns = true
//!
//! [charlist_conversion]
//! module = "Elixir.List"
//! function = "to_charlist"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Remote function applied to the binary built for an interpolated char list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharlistConversion {
    pub module: String,
    pub function: String,
}

impl Default for CharlistConversion {
    fn default() -> Self {
        Self {
            module: "Elixir.String".to_string(),
            function: "to_char_list".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteOptions {
    pub charlist_conversion: CharlistConversion,
    /// Add `column: C` after `line: L` in every metadata list
    pub columns: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Invalid { path: Option<PathBuf>, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "cannot read options from {}: {}", path.display(), message)
            }
            ConfigError::Invalid {
                path: Some(path),
                message,
            } => write!(f, "invalid options in {}: {}", path.display(), message),
            ConfigError::Invalid { path: None, message } => {
                write!(f, "invalid options: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl QuoteOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Invalid {
            path: None,
            message: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Invalid {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = QuoteOptions::default();
        assert_eq!(options.charlist_conversion.module, "Elixir.String");
        assert_eq!(options.charlist_conversion.function, "to_char_list");
        assert!(!options.columns);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(QuoteOptions::from_toml_str("").unwrap(), QuoteOptions::default());
    }

    #[test]
    fn test_partial_document() {
        let options = QuoteOptions::from_toml_str("columns = true").unwrap();
        assert!(options.columns);
        assert_eq!(options.charlist_conversion, CharlistConversion::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = QuoteOptions::from_toml_str("colums = true").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { path: None, .. }));
        assert!(err.to_string().starts_with("invalid options:"));
    }
}
