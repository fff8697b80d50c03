use super::{effective, Parser};
use crate::error::ConvertError;
use crate::input::Input;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolParserOptions {
    pub true_values: Vec<String>,
    pub false_values: Vec<String>,
    pub case_sensitive: bool,
}

impl Default for BoolParserOptions {
    fn default() -> Self {
        Self {
            true_values: ["true", "yes", "1", "t", "y"].map(String::from).to_vec(),
            false_values: ["false", "no", "0", "f", "n"].map(String::from).to_vec(),
            case_sensitive: false,
        }
    }
}

impl BoolParserOptions {
    fn lookup(&self, text: &str) -> Option<bool> {
        let matches = |candidate: &String| {
            if self.case_sensitive {
                candidate == text
            } else {
                candidate.to_lowercase() == text.to_lowercase()
            }
        };
        if self.true_values.iter().any(matches) {
            Some(true)
        } else if self.false_values.iter().any(matches) {
            Some(false)
        } else {
            None
        }
    }
}

/// Booleans from configurable sets of true and false words.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolParser;

pub static PARSER: BoolParser = BoolParser;

impl Parser<bool> for BoolParser {
    type ValidateOptions = BoolParserOptions;
    type ParseOptions = BoolParserOptions;
    type Error = ConvertError;

    fn validate_sync(&self, input: Input<'_>, options: Option<&BoolParserOptions>) -> bool {
        match input {
            Input::Missing | Input::Null => false,
            Input::Text(text) => effective(options).lookup(text).is_some(),
        }
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&BoolParserOptions>,
    ) -> Result<bool, ConvertError> {
        match input {
            Input::Missing | Input::Null => Err(ConvertError::invalid_boolean(input)),
            Input::Text(text) => effective(options)
                .lookup(text)
                .ok_or_else(|| ConvertError::invalid_boolean(input)),
        }
    }
}
