//! Serde helpers for lenient request decoding.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserialize `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing field falls back the same way:
/// ```ignore
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::null_as_default")]
///     year: i64,
/// }
/// ```
pub fn null_as_default<'de, T, D>(de: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

/// Rename object keys that equal one of `fields` ignoring ASCII case to the
/// field's canonical spelling.
///
/// A key spelled exactly like the field wins over a case-folded one. Other
/// keys, and values that are not objects, pass through unchanged.
pub fn fold_field_names(value: Value, fields: &[&str]) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let (exact, rest): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(key, _)| fields.contains(&key.as_str()));

    let mut folded = Map::with_capacity(exact.len() + rest.len());
    for (key, v) in rest {
        let key = fields
            .iter()
            .find(|f| f.eq_ignore_ascii_case(&key))
            .map_or(key, |f| f.to_string());
        folded.insert(key, v);
    }
    folded.extend(exact);

    Value::Object(folded)
}
