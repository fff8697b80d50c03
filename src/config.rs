use crate::error::StringToError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which parsers take part in [`crate::api::try_any_to_primitive`].
///
/// Deserializing a partial document keeps the default for every field it leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TryAllOptions {
    pub number: bool,
    pub date: bool,
    pub boolean: bool,
}

impl Default for TryAllOptions {
    fn default() -> Self {
        Self {
            number: true,
            date: true,
            boolean: true,
        }
    }
}

impl TryAllOptions {
    /// # Errors
    /// Returns [`StringToError::Json`] if `source` is not a valid options document.
    pub fn from_json_str(source: &str) -> Result<Self, StringToError> {
        Ok(serde_json::from_str(source)?)
    }

    /// # Errors
    /// Returns [`StringToError::Yaml`] if `source` is not a valid options document.
    pub fn from_yaml_str(source: &str) -> Result<Self, StringToError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file. Other extensions are read as JSON.
    ///
    /// # Errors
    /// Returns [`StringToError::Io`] if the file cannot be read, or a format error
    /// if its content is not a valid options document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StringToError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StringToError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        log::debug!(
            "loading conversion options from {} as {}",
            path.display(),
            if is_yaml { "YAML" } else { "JSON" }
        );

        if is_yaml {
            Self::from_yaml_str(&source)
        } else {
            Self::from_json_str(&source)
        }
    }
}
