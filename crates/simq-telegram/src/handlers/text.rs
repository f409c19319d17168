use std::sync::Arc;

use teloxide::prelude::*;

use simq_core::domain::ChatId;

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);

    // Non-text content carries no ICCID candidate; the service treats the
    // empty string as a rejected identifier and sends the format guidance.
    let text = msg.text().unwrap_or_default().to_string();

    if let Err(e) = state
        .service
        .respond(chat_id, &text, state.messenger.clone())
        .await
    {
        tracing::warn!("failed to deliver reply to chat {}: {e}", chat_id.0);
    }

    Ok(())
}
