use async_trait::async_trait;

use crate::{domain::ChatId, messaging::types::InlineKeyboard, Result};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape is small enough that
/// other chat gateways can fit behind it. Replies are an HTML subset
/// (bold and code tags only).
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<()>;

    async fn send_html_with_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
