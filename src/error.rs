use crate::input::Input;
use miette::{Diagnostic, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Code carried by [`ConvertError::InvalidBoolean`].
pub const INVALID_BOOLEAN_VALUE: &str = "E_INVALID_BOOLEAN_VALUE";
/// Code carried by [`ConvertError::InvalidDate`].
pub const INVALID_DATE_VALUE: &str = "E_INVALID_DATE_VALUE";

#[derive(Error, Debug, Diagnostic)]
pub enum StringToError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    #[diagnostic(code(string_to::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(string_to::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read '{}'", path.display())]
    #[diagnostic(code(string_to::io), help("Check that the file exists and is readable."))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raised by a direct `parse` call on a value its parser does not accept.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Value '{value}' is neither in true_values nor false_values")]
    #[diagnostic(
        code(string_to::invalid_boolean),
        help("Use one of the configured true_values or false_values, or call validate first.")
    )]
    InvalidBoolean {
        value: String,
        #[source_code]
        src: String,
        #[label("not a boolean")]
        span: SourceSpan,
    },

    #[error("Value '{value}' is not parsable to a date")]
    #[diagnostic(
        code(string_to::invalid_date),
        help("Dates are accepted in ISO 8601, RFC 2822 and common written forms such as 'Nov 14, 2018'.")
    )]
    InvalidDate {
        value: String,
        #[source_code]
        src: String,
        #[label("not a date")]
        span: SourceSpan,
    },
}

impl ConvertError {
    pub(crate) fn invalid_boolean(input: Input<'_>) -> Self {
        let (value, span) = labelled(input);
        ConvertError::InvalidBoolean {
            src: value.clone(),
            value,
            span,
        }
    }

    pub(crate) fn invalid_date(input: Input<'_>) -> Self {
        let (value, span) = labelled(input);
        ConvertError::InvalidDate {
            src: value.clone(),
            value,
            span,
        }
    }

    /// The stable error code, e.g. `E_INVALID_BOOLEAN_VALUE`.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::InvalidBoolean { .. } => INVALID_BOOLEAN_VALUE,
            ConvertError::InvalidDate { .. } => INVALID_DATE_VALUE,
        }
    }

    /// The offending value as it was rendered into the message.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            ConvertError::InvalidBoolean { value, .. } | ConvertError::InvalidDate { value, .. } => {
                value
            }
        }
    }
}

fn labelled(input: Input<'_>) -> (String, SourceSpan) {
    let value = input.to_string();
    let span = (0, value.len()).into();
    (value, span)
}
