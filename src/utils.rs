use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

pub fn is_false(value: &bool) -> bool {
    !*value
}

pub fn is_zero(value: &u32) -> bool {
    *value == 0
}

pub fn is_empty_data(value: &Option<JsonValue>) -> bool {
    matches!(value, None | Some(JsonValue::Null))
}

/// Reads an explicit JSON `null` as the type's default instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
