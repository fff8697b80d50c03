use super::{effective, Parser};
use crate::input::Input;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayParserOptions {
    pub separator: String,
    /// Maximum number of items kept.
    pub limit: usize,
}

impl Default for ArrayParserOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            limit: usize::MAX,
        }
    }
}

/// Splits text into a list of strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayParser;

pub static PARSER: ArrayParser = ArrayParser;

impl Parser<Vec<String>> for ArrayParser {
    type ValidateOptions = ();
    type ParseOptions = ArrayParserOptions;
    type Error = Infallible;

    fn validate_sync(&self, input: Input<'_>, _options: Option<&()>) -> bool {
        match input {
            Input::Missing | Input::Null => false,
            Input::Text(text) => !text.is_empty(),
        }
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&ArrayParserOptions>,
    ) -> Result<Vec<String>, Infallible> {
        let text = match input {
            Input::Missing | Input::Null => return Ok(Vec::new()),
            Input::Text(text) => text,
        };
        let options = effective(options);

        let items = if options.separator.is_empty() {
            text.chars()
                .take(options.limit)
                .map(String::from)
                .collect()
        } else {
            text.split(options.separator.as_str())
                .take(options.limit)
                .map(String::from)
                .collect()
        };
        Ok(items)
    }
}
