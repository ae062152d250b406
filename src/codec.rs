//! JSON codec for persisted collections.
//!
//! Collections are stored as JSON arrays whose element order is significant
//! (prepend order for saved signals and search history, append order for
//! notes). Decoding is a tagged operation: an absent value is an empty
//! collection, while a present but malformed value is an explicit error that
//! the caller downgrades to the empty default.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Error as SerdeError;

/// Decodes a raw stored value into an ordered collection.
///
/// `None` (key never written) decodes to an empty collection. A present value
/// is parsed strictly; parse failures are returned to the caller rather than
/// silently swallowed, so the substitution of the empty default happens at
/// exactly one place in the store.
pub fn decode_collection<T: DeserializeOwned>(raw: Option<&str>) -> Result<Vec<T>, SerdeError> {
    match raw {
        None => Ok(Vec::new()),
        Some(value) => serde_json::from_str(value),
    }
}

/// Encodes a collection to its stored JSON form, preserving order exactly.
pub fn encode_collection<T: Serialize>(items: &[T]) -> Result<String, SerdeError> {
    serde_json::to_string(items)
}
