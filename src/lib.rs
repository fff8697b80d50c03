pub mod api;
pub mod config;
pub mod datetime;
pub mod error;
pub mod input;
pub mod literal;
pub mod parser;
pub mod resolver;
pub mod value;
pub mod walker;
mod serialization;

pub use api::{
    convert, convert_sync, parse_array_items, parse_array_items_sync, parse_object_keys,
    parse_object_keys_sync, try_any_to_primitive,
};
pub use config::TryAllOptions;
pub use error::{ConvertError, StringToError};
pub use input::Input;
pub use parser::{ParseSettings, Parser};
pub use value::{Map, Shape, Value};
