use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default value.
///
/// `#[serde(default)]` only covers a missing key; repository events also
/// send `null` for empty lists and unset flags.
pub(crate) fn null_is_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
