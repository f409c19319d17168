//! Telegram update handlers.
//!
//! One inbound message produces exactly one outbound reply; all failures
//! are converted to replies inside the core service, and delivery errors
//! are logged rather than propagated so a bad message can never take down
//! the polling loop.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;
mod callback;
mod text;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    text::handle_text(msg, state).await
}
