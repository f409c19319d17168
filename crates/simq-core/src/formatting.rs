//! Report text helpers (Telegram HTML escaping, absent-field placeholder).

/// Rendered in place of a display field the upstream did not provide.
pub const UNKNOWN: &str = "unknown";

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Display value for an optional upstream field: the value itself, or the
/// [`UNKNOWN`] placeholder when the upstream omitted it.
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// Escaped display value for an optional upstream field.
pub fn field(value: Option<&str>) -> String {
    escape_html(or_unknown(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>&"fish"</b>"#),
            "&lt;b&gt;&amp;&quot;fish&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn absent_fields_become_placeholder() {
        assert_eq!(or_unknown(None), UNKNOWN);
        assert_eq!(or_unknown(Some("5GB")), "5GB");
        assert_eq!(field(Some("<x>")), "&lt;x&gt;");
        assert_eq!(field(None), UNKNOWN);
    }
}
