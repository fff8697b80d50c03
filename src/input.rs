use std::fmt::{self, Display};

/// A raw input handed to a parser.
///
/// Loosely-typed sources distinguish between a value that was never provided
/// (`Missing`), one that was explicitly cleared (`Null`) and real text, which may
/// itself be empty. Every parser treats the three cases as separate branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input<'a> {
    /// No value at all.
    Missing,
    /// An explicit null.
    Null,
    /// Text, possibly empty.
    Text(&'a str),
}

impl<'a> Input<'a> {
    /// Returns the text if there is any.
    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Missing | Input::Null => None,
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Input::Text(_))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Input::Missing, Input::Text)
    }
}

impl Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Missing => write!(f, "undefined"),
            Input::Null => write!(f, "null"),
            Input::Text(text) => write!(f, "{text}"),
        }
    }
}
