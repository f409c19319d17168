//! Holafly result record and normalizer.

use serde_json::Value;

use crate::domain::Iccid;
use crate::formatting::field;
use crate::providers::{json_text, nested_text};

/// A Holafly customer card. Every field is display-only and optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolaflyCard {
    pub order_name: Option<String>,
    /// English variant of the localized destination name.
    pub destination: Option<String>,
    /// English variant of the localized bundle name. The upstream field is
    /// spelled `boundle`.
    pub bundle: Option<String>,
    pub created_at: Option<String>,
    pub deactivation_date: Option<String>,
    pub activation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub remaining_days: Option<String>,
    pub total_days: Option<String>,
    pub used_data: Option<String>,
    pub total_data_mb: Option<String>,
}

impl HolaflyCard {
    /// Build from the raw card-by-ICCID body; any JSON shape is accepted.
    pub fn from_response(body: &Value) -> Self {
        Self {
            order_name: json_text(body, "order_name"),
            destination: nested_text(body, "destination", "en"),
            bundle: nested_text(body, "boundle", "en"),
            created_at: json_text(body, "createdAt"),
            deactivation_date: json_text(body, "deactivation_date"),
            activation_date: json_text(body, "activationDate"),
            expiration_date: json_text(body, "expirationDate"),
            remaining_days: json_text(body, "remainingDays"),
            total_days: json_text(body, "totalDays"),
            used_data: json_text(body, "usedData"),
            total_data_mb: json_text(body, "totalDataMb"),
        }
    }
}

pub fn render(iccid: &Iccid, card: &HolaflyCard) -> String {
    format!(
        "<b>ICCID:</b> <code>{}</code>\n\
         <b>ORDER:</b> {}\n\
         <b>NAME:</b> {} - {}\n\
         <b>CREATE:</b> {}\n\
         <b>END:</b> {}\n\
         <b>ACTIVE:</b> {}\n\
         <b>EXPIRE:</b> {}\n\
         <b>TIME:</b> {} / {} Day(s)\n\
         <b>DATA:</b> {} / {} MB",
        iccid,
        field(card.order_name.as_deref()),
        field(card.destination.as_deref()),
        field(card.bundle.as_deref()),
        field(card.created_at.as_deref()),
        field(card.deactivation_date.as_deref()),
        field(card.activation_date.as_deref()),
        field(card.expiration_date.as_deref()),
        field(card.remaining_days.as_deref()),
        field(card.total_days.as_deref()),
        field(card.used_data.as_deref()),
        field(card.total_data_mb.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn iccid() -> Iccid {
        Iccid::parse("8999999999999999999").unwrap()
    }

    #[test]
    fn builds_from_full_response() {
        let body = json!({
            "order_name": "HF-1234",
            "destination": {"en": "Japan", "es": "Japón"},
            "boundle": {"en": "Unlimited 10 days"},
            "createdAt": "2026-01-01",
            "deactivation_date": "2026-02-01",
            "activationDate": "2026-01-02",
            "expirationDate": "2026-01-12",
            "remainingDays": 7,
            "totalDays": 10,
            "usedData": "1024",
            "totalDataMb": "10240",
        });
        let card = HolaflyCard::from_response(&body);
        let out = render(&iccid(), &card);
        assert!(out.contains("<b>ORDER:</b> HF-1234"));
        assert!(out.contains("<b>NAME:</b> Japan - Unlimited 10 days"));
        assert!(out.contains("<b>TIME:</b> 7 / 10 Day(s)"));
        assert!(out.contains("<b>DATA:</b> 1024 / 10240 MB"));
    }

    #[test]
    fn tolerates_missing_and_misshapen_fields() {
        // `destination` is a plain string instead of a localized object.
        let card = HolaflyCard::from_response(&json!({"destination": "Japan"}));
        assert_eq!(card.destination, None);

        let out = render(&iccid(), &HolaflyCard::from_response(&Value::Null));
        assert!(out.contains("<b>ORDER:</b> unknown"));
        assert!(out.contains("<b>TIME:</b> unknown / unknown Day(s)"));
    }
}
