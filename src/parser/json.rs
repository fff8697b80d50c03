use super::Parser;
use crate::input::Input;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Called bottom-up for every member of a parsed document before it is
/// deserialized. Receives the member key (array index, or `""` for the root) and
/// its value. Returning `None` drops an object member and nulls anything else.
pub type Reviver = Arc<dyn Fn(&str, JsonValue) -> Option<JsonValue> + Send + Sync>;

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct JsonParseOptions {
    #[serde(skip)]
    pub reviver: Option<Reviver>,
}

impl JsonParseOptions {
    pub fn with_reviver<F>(reviver: F) -> Self
    where
        F: Fn(&str, JsonValue) -> Option<JsonValue> + Send + Sync + 'static,
    {
        Self {
            reviver: Some(Arc::new(reviver)),
        }
    }
}

impl fmt::Debug for JsonParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonParseOptions")
            .field("reviver", &self.reviver.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Arbitrary JSON documents, deserialized into `T`.
///
/// Validation only checks the JSON grammar, so a valid document may still fail to
/// deserialize into a narrower `T`; `validate_and_parse_sync` then returns the default.
pub struct JsonParser<T = JsonValue> {
    target: PhantomData<fn() -> T>,
}

impl<T> JsonParser<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: PhantomData,
        }
    }
}

impl<T> Default for JsonParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonParser<T> {}

impl<T> fmt::Debug for JsonParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonParser")
    }
}

pub static PARSER: JsonParser = JsonParser::new();

impl<T: DeserializeOwned> Parser<T> for JsonParser<T> {
    type ValidateOptions = ();
    type ParseOptions = JsonParseOptions;
    type Error = serde_json::Error;

    fn validate_sync(&self, input: Input<'_>, _options: Option<&()>) -> bool {
        match input {
            Input::Missing | Input::Null => false,
            Input::Text(text) => serde_json::from_str::<IgnoredAny>(text).is_ok(),
        }
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&JsonParseOptions>,
    ) -> Result<T, serde_json::Error> {
        // Missing and null read as empty text and fail with serde_json's EOF error.
        let text = input.as_text().unwrap_or_default();
        match options.and_then(|o| o.reviver.as_deref()) {
            None => serde_json::from_str(text),
            Some(reviver) => {
                let document: JsonValue = serde_json::from_str(text)?;
                let revived = revive(reviver, "", document).unwrap_or(JsonValue::Null);
                serde_json::from_value(revived)
            }
        }
    }
}

fn revive(
    reviver: &(dyn Fn(&str, JsonValue) -> Option<JsonValue> + Send + Sync),
    key: &str,
    value: JsonValue,
) -> Option<JsonValue> {
    let value = match value {
        JsonValue::Array(items) => JsonValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    revive(reviver, &index.to_string(), item).unwrap_or(JsonValue::Null)
                })
                .collect(),
        ),
        JsonValue::Object(members) => JsonValue::Object(
            members
                .into_iter()
                .filter_map(|(name, member)| {
                    revive(reviver, &name, member).map(|revived| (name, revived))
                })
                .collect(),
        ),
        scalar => scalar,
    };
    reviver(key, value)
}
