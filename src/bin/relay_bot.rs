//! Relay Bot
//!
//! Telegram bot that forwards every text message to the prediction service
//! and sends the answer back. Reads `TELEGRAM_TOKEN`, `FLOWISE_API_URL` and
//! `FLOWISE_API_KEY` from the environment or `.env`.

use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use rdfkb::config::RelayConfig;
use rdfkb::relay::{classify, relay, Incoming, PredictionClient, HELP_REPLY, START_REPLY};
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, Message};
use tracing::{info, warn};

async fn handle_message(bot: Bot, msg: Message, client: Arc<PredictionClient>) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match classify(text) {
        Incoming::Start => {
            bot.send_message(msg.chat.id, START_REPLY).await?;
        }
        Incoming::Help => {
            bot.send_message(msg.chat.id, HELP_REPLY).await?;
        }
        Incoming::UnknownCommand => {}
        Incoming::Question(question) => {
            info!(chat = msg.chat.id.0, "question received");
            if let Err(err) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
                warn!(error = %err, "typing indicator failed");
            }
            let answer = relay(&client, question).await;
            bot.send_message(msg.chat.id, answer).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = RelayConfig::from_env();
    let token = config.require_token()?.to_string();
    let client = Arc::new(PredictionClient::new(&config)?);

    info!(url = client.url(), "Starting Relay Bot...");

    let bot = Bot::new(token);

    Dispatcher::builder(
        bot,
        Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
            let client = client.clone();
            async move { handle_message(bot, msg, client).await }
        }),
    )
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}
