use serde::{Deserialize, Deserializer};

/// Accept `null` where a string is expected. Older outputs write `null` for
/// titles and pictures the catalog did not have.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
