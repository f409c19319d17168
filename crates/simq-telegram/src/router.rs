use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use simq_core::{config::Config, messaging::port::MessagingPort, service::LookupService};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LookupService>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, service: Arc<LookupService>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("simq started: @{}", me.username());
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState { service, messenger });

    // Updates are dispatched concurrently, so a slow upstream for one chat
    // does not delay replies to others. No state is shared across messages.
    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
