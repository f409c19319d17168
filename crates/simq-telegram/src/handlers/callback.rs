use std::sync::Arc;

use teloxide::prelude::*;

use crate::router::AppState;

/// Acknowledgement for the follow-up buttons attached to CMLink reports.
/// The actions themselves are handled by an external system; the bot only
/// confirms the press.
fn callback_ack(data: &str) -> Option<String> {
    match data.split_once(':') {
        Some(("activate", iccid)) if !iccid.is_empty() => {
            Some(format!("Activation request noted for {iccid}."))
        }
        Some(("usage", iccid)) if !iccid.is_empty() => {
            Some(format!("Usage report requested for {iccid}."))
        }
        _ => None,
    }
}

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let data = q.data.unwrap_or_default();
    let ack = callback_ack(&data);

    if let Err(e) = state
        .messenger
        .answer_callback_query(&q.id, ack.as_deref())
        .await
    {
        tracing::warn!("failed to answer callback query: {e}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledges_known_actions() {
        assert_eq!(
            callback_ack("activate:8985234000000000001").as_deref(),
            Some("Activation request noted for 8985234000000000001.")
        );
        assert_eq!(
            callback_ack("usage:8985234000000000001").as_deref(),
            Some("Usage report requested for 8985234000000000001.")
        );
    }

    #[test]
    fn ignores_unknown_or_malformed_data() {
        assert_eq!(callback_ack(""), None);
        assert_eq!(callback_ack("activate:"), None);
        assert_eq!(callback_ack("delete:123"), None);
        assert_eq!(callback_ack("activate"), None);
    }
}
