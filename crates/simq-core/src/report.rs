use crate::messaging::types::InlineKeyboard;

/// A fully rendered reply: HTML text plus optional follow-up controls.
///
/// Built fresh per request, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub html: String,
    pub keyboard: Option<InlineKeyboard>,
}

impl Report {
    pub fn text(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(html: impl Into<String>, keyboard: InlineKeyboard) -> Self {
        Self {
            html: html.into(),
            keyboard: Some(keyboard),
        }
    }
}
