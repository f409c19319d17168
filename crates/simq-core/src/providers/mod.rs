//! Provider result records, normalizers, and the upstream gateway port.
//!
//! Each upstream has its own response schema; the records here are the
//! typed, tolerant view of those payloads, and each module renders its
//! record into the uniform report format.

use async_trait::async_trait;
use serde_json::Value;

use crate::{domain::Iccid, Result};

pub mod cmlink;
pub mod holafly;
pub mod three_hk;

pub use cmlink::CmlinkBundle;
pub use holafly::HolaflyCard;
pub use three_hk::ThreeHkInfo;

/// Port over the three upstream provider integrations.
///
/// Implemented by the reqwest adapter crate; faked in service tests. Each
/// method runs its provider's full (possibly multi-step) flow once, with
/// no retry and no session reuse across calls.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// CMLink: login, token exchange, then fetch the first subscribed data
    /// bundle. `Ok(None)` means the query succeeded but the card has no
    /// bundle on record.
    async fn cmlink_bundle(&self, iccid: &Iccid) -> Result<Option<CmlinkBundle>>;

    /// 3HK: resolve the MSISDN for the card, then look up customer info.
    async fn three_hk_info(&self, iccid: &Iccid) -> Result<ThreeHkInfo>;

    /// Holafly: fetch the customer card record.
    async fn holafly_card(&self, iccid: &Iccid) -> Result<HolaflyCard>;
}

/// Tolerant text extraction from an untyped JSON object.
///
/// Numbers and booleans coerce to their text form; anything else (absent
/// key, null, arrays, objects, or a non-object root) is `None`.
pub fn json_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// [`json_text`] one object level down (`value[key][inner]`).
pub fn nested_text(value: &Value, key: &str, inner: &str) -> Option<String> {
    json_text(value.get(key)?, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_text_coerces_scalars() {
        let v = json!({"a": "x", "b": 42, "c": true, "d": null, "e": {"f": 1}});
        assert_eq!(json_text(&v, "a").as_deref(), Some("x"));
        assert_eq!(json_text(&v, "b").as_deref(), Some("42"));
        assert_eq!(json_text(&v, "c").as_deref(), Some("true"));
        assert_eq!(json_text(&v, "d"), None);
        assert_eq!(json_text(&v, "e"), None);
        assert_eq!(json_text(&v, "missing"), None);
    }

    #[test]
    fn json_text_survives_non_object_roots() {
        assert_eq!(json_text(&Value::Null, "a"), None);
        assert_eq!(json_text(&json!([1, 2]), "a"), None);
    }

    #[test]
    fn nested_text_reaches_one_level_down() {
        let v = json!({"destination": {"en": "Japan", "es": "Japón"}});
        assert_eq!(nested_text(&v, "destination", "en").as_deref(), Some("Japan"));
        assert_eq!(nested_text(&v, "destination", "fr"), None);
        assert_eq!(nested_text(&v, "missing", "en"), None);
    }
}
