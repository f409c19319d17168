//! CMLink result record, normalizer, and follow-up actions.

use serde::Deserialize;

use crate::domain::Iccid;
use crate::formatting::field;
use crate::messaging::types::{InlineButton, InlineKeyboard};

/// One subscribed data bundle, as returned by the CMLink RPC gateway.
///
/// All fields are optional; the upstream payload is untrusted.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CmlinkBundle {
    pub name: Option<String>,
    #[serde(rename = "bundleDesc")]
    pub bundle_desc: Option<String>,
    #[serde(rename = "createTime")]
    pub create_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
}

pub fn render(iccid: &Iccid, bundle: &CmlinkBundle) -> String {
    format!(
        "<b>ICCID:</b> <code>{}</code>\n\
         <b>NAME:</b> {}\n\
         <b>DESC:</b> {}\n\
         <b>CREATE:</b> {}\n\
         <b>END:</b> {}",
        iccid,
        field(bundle.name.as_deref()),
        field(bundle.bundle_desc.as_deref()),
        field(bundle.create_time.as_deref()),
        field(bundle.end_time.as_deref()),
    )
}

/// The query succeeded but the bundle list came back empty or absent.
pub fn render_no_bundle(iccid: &Iccid) -> String {
    format!(
        "<b>ICCID:</b> <code>{iccid}</code>\n\
         No active data bundle found for this card."
    )
}

/// Follow-up controls offered with every CMLink report. The actions are
/// handled externally; the callback data only tags the card.
pub fn actions(iccid: &Iccid) -> InlineKeyboard {
    InlineKeyboard::single_row(vec![
        InlineButton::new("Activate", format!("activate:{iccid}")),
        InlineButton::new("Usage", format!("usage:{iccid}")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iccid() -> Iccid {
        Iccid::parse("8985234000000000001").unwrap()
    }

    #[test]
    fn renders_all_five_lines() {
        let bundle = CmlinkBundle {
            name: Some("Asia 5GB".to_string()),
            bundle_desc: Some("5GB / 30 days".to_string()),
            create_time: Some("2026-01-01 10:00:00".to_string()),
            end_time: Some("2026-01-31 10:00:00".to_string()),
        };
        let out = render(&iccid(), &bundle);
        assert!(out.contains("<b>ICCID:</b> <code>8985234000000000001</code>"));
        assert!(out.contains("<b>NAME:</b> Asia 5GB"));
        assert!(out.contains("<b>DESC:</b> 5GB / 30 days"));
        assert!(out.contains("<b>CREATE:</b> 2026-01-01 10:00:00"));
        assert!(out.contains("<b>END:</b> 2026-01-31 10:00:00"));
    }

    #[test]
    fn missing_fields_render_placeholder_instead_of_failing() {
        let out = render(&iccid(), &CmlinkBundle::default());
        assert!(out.contains("<b>NAME:</b> unknown"));
        assert!(out.contains("<b>END:</b> unknown"));
    }

    #[test]
    fn field_values_are_escaped() {
        let bundle = CmlinkBundle {
            name: Some("<script>".to_string()),
            ..Default::default()
        };
        let out = render(&iccid(), &bundle);
        assert!(out.contains("<b>NAME:</b> &lt;script&gt;"));
    }

    #[test]
    fn actions_tag_the_identifier() {
        let kb = actions(&iccid());
        assert_eq!(kb.rows.len(), 1);
        assert_eq!(kb.rows[0][0].label, "Activate");
        assert_eq!(kb.rows[0][0].callback_data, "activate:8985234000000000001");
        assert_eq!(kb.rows[0][1].label, "Usage");
        assert_eq!(kb.rows[0][1].callback_data, "usage:8985234000000000001");
    }

    #[test]
    fn deserializes_upstream_field_names() {
        let b: CmlinkBundle = serde_json::from_str(
            r#"{"name":"X","bundleDesc":"d","createTime":"c","endTime":"e","extra":1}"#,
        )
        .unwrap();
        assert_eq!(b.bundle_desc.as_deref(), Some("d"));
        assert_eq!(b.end_time.as_deref(), Some("e"));
    }
}
