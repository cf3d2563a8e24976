//! Lenient deserializers for OCS wire scalars.
//!
//! The server is not strict about scalar lexical forms: booleans arrive as
//! `0`/`1` as often as `true`/`false`, paging counters are emitted as empty
//! elements, and id lists are nested one level down in repeated `<element>`
//! children. These adapters keep those quirks out of the payload structs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserialize a boolean that may arrive as `0`/`1` or `true`/`false`.
/// A missing or empty element decodes as `false`.
pub(crate) fn wire_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "true" => Ok(true),
        "" | "0" | "false" => Ok(false),
        other => Err(D::Error::custom(format!("invalid boolean literal '{other}'"))),
    }
}

/// Deserialize a counter that may be an empty element (`<totalitems/>`).
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid counter '{value}'"))),
    }
}

/// Deserialize `<wrapper><element>a</element><element>b</element></wrapper>`
/// into a `Vec<String>`, preserving document order. An empty or self-closed
/// wrapper decodes as an empty list.
pub(crate) fn element_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    struct Elements {
        #[serde(default)]
        element: Vec<String>,
    }

    let wrapper = Option::<Elements>::deserialize(deserializer)?;
    Ok(wrapper.map(|w| w.element).unwrap_or_default())
}
