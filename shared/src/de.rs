//! Field decoders shared by the payload types.
//!
//! The CMS writes `null` for fields an editor never touched, where serde's
//! `#[serde(default)]` only covers keys that are absent.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Decodes `null` like a missing field: the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes an optional field that must not fail its parent: a value of the
/// wrong shape reads as `None`.
pub(crate) fn ok_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(err) => {
            log::debug!("ignoring undecodable field: {err}");
            Ok(None)
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "null_as_default")]
        enabled: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn null_and_missing_decode_alike() {
        let flags: Flags = serde_json::from_value(json!({ "enabled": null, "items": null })).unwrap();
        assert!(!flags.enabled);
        assert!(flags.items.is_empty());

        let flags: Flags = serde_json::from_value(json!({})).unwrap();
        assert!(!flags.enabled);

        let flags: Flags = serde_json::from_value(json!({ "enabled": true, "items": [3] })).unwrap();
        assert!(flags.enabled);
        assert_eq!(flags.items, vec![3]);
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "ok_or_none")]
        flags: Option<Flags>,
    }

    #[test]
    fn malformed_optional_field_reads_as_none() {
        let wrapper: Wrapper = serde_json::from_value(json!({ "flags": { "items": "x" } })).unwrap();
        assert!(wrapper.flags.is_none());

        let wrapper: Wrapper = serde_json::from_value(json!({ "flags": { "enabled": true } })).unwrap();
        assert!(wrapper.flags.is_some_and(|flags| flags.enabled));

        let wrapper: Wrapper = serde_json::from_value(json!({ "flags": null })).unwrap();
        assert!(wrapper.flags.is_none());
    }

    #[test]
    fn wrong_type_still_fails() {
        assert!(serde_json::from_value::<Flags>(json!({ "items": "x" })).is_err());
    }
}
