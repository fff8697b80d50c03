//! The parser contract and the primitive parsers built on it.

pub mod array;
pub mod boolean;
pub mod date;
pub mod float;
pub mod int;
pub mod json;
pub mod number;

use crate::input::Input;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use std::future::{ready, Ready};

pub use array::ArrayParser;
pub use boolean::BoolParser;
pub use date::DateParser;
pub use float::FloatParser;
pub use int::IntParser;
pub use json::JsonParser;
pub use number::NumberParser;

/// Inclusive (`min`, `max`) and exclusive (`gt`, `lt`) limits on a parsed number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub gt: Option<f64>,
    pub lt: Option<f64>,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| value <= max)
            && self.gt.map_or(true, |gt| value > gt)
            && self.lt.map_or(true, |lt| value < lt)
    }
}

/// Options for [`Parser::validate_and_parse_sync`]: one set for each half of the call.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSettings<V, P> {
    pub validator: Option<V>,
    pub parser: Option<P>,
}

impl<V, P> Default for ParseSettings<V, P> {
    fn default() -> Self {
        Self {
            validator: None,
            parser: None,
        }
    }
}

impl<V, P> ParseSettings<V, P> {
    #[must_use]
    pub fn with_validator(mut self, options: V) -> Self {
        self.validator = Some(options);
        self
    }

    #[must_use]
    pub fn with_parser(mut self, options: P) -> Self {
        self.parser = Some(options);
        self
    }
}

/// Converts loosely-typed input into a `T`.
///
/// Implementors provide `validate_sync` and `parse_sync`. Everything else is
/// derived from those two. The non-blocking variants do the same work
/// immediately and hand back an already-completed future.
pub trait Parser<T> {
    type ValidateOptions: Default + Clone;
    type ParseOptions: Default + Clone;
    type Error: Display;

    /// Decides whether `input` can be converted. `Missing` and `Null` are never valid.
    fn validate_sync(&self, input: Input<'_>, options: Option<&Self::ValidateOptions>) -> bool;

    /// Converts `input` without validating it first.
    ///
    /// # Errors
    /// Depends on the parser: numeric parsers never fail and return NaN instead,
    /// boolean and date parsers return a [`crate::error::ConvertError`], the JSON
    /// parser returns the underlying `serde_json::Error`.
    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&Self::ParseOptions>,
    ) -> Result<T, Self::Error>;

    fn validate(&self, input: Input<'_>, options: Option<&Self::ValidateOptions>) -> Ready<bool> {
        ready(self.validate_sync(input, options))
    }

    /// # Errors
    /// Same as [`Parser::parse_sync`].
    fn parse(
        &self,
        input: Input<'_>,
        options: Option<&Self::ParseOptions>,
    ) -> Ready<Result<T, Self::Error>> {
        ready(self.parse_sync(input, options))
    }

    /// Validates, then parses. Returns `default` when `input` is not valid.
    ///
    /// This is the total entry point: it never fails and never panics.
    fn validate_and_parse_sync(
        &self,
        input: Input<'_>,
        default: Option<T>,
        settings: Option<&ParseSettings<Self::ValidateOptions, Self::ParseOptions>>,
    ) -> Option<T> {
        let validator = settings.and_then(|s| s.validator.as_ref());
        if !self.validate_sync(input, validator) {
            return default;
        }
        let parser = settings.and_then(|s| s.parser.as_ref());
        match self.parse_sync(input, parser) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("'{input}' validated but did not parse: {err}");
                default
            }
        }
    }

    fn validate_and_parse(
        &self,
        input: Input<'_>,
        default: Option<T>,
        settings: Option<&ParseSettings<Self::ValidateOptions, Self::ParseOptions>>,
    ) -> Ready<Option<T>> {
        ready(self.validate_and_parse_sync(input, default, settings))
    }
}

/// Caller options if given, the built-in defaults otherwise.
pub(crate) fn effective<O: Default + Clone>(options: Option<&O>) -> Cow<'_, O> {
    options.map_or_else(|| Cow::Owned(O::default()), Cow::Borrowed)
}
