use super::Parser;
use crate::datetime;
use crate::error::ConvertError;
use crate::input::Input;
use chrono::{DateTime, Utc};

/// Calendar dates and times, normalised to UTC.
///
/// See [`crate::datetime`] for the accepted forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateParser;

pub static PARSER: DateParser = DateParser;

impl Parser<DateTime<Utc>> for DateParser {
    type ValidateOptions = ();
    type ParseOptions = ();
    type Error = ConvertError;

    fn validate_sync(&self, input: Input<'_>, _options: Option<&()>) -> bool {
        match input {
            Input::Missing | Input::Null => false,
            Input::Text(text) => datetime::is_date(text),
        }
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        _options: Option<&()>,
    ) -> Result<DateTime<Utc>, ConvertError> {
        match input {
            Input::Missing | Input::Null => Err(ConvertError::invalid_date(input)),
            Input::Text(text) => {
                datetime::parse_date(text).ok_or_else(|| ConvertError::invalid_date(input))
            }
        }
    }
}
