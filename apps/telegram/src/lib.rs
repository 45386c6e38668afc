//! Telegram transport for the otterchat relay.
//!
//! Routes commands, mode-selection callbacks, and plain text messages
//! into [`Relay`] and delivers every outcome as a plain text reply.
//! Handler errors are logged by the dispatcher and never stop polling.

pub use config::Secrets;

use anyhow::Result;
use llm::{Client, OpenAI};
use ocore::{Outcome, Relay, RelayConfig, ReplyMode};
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateFilterExt,
    dptree,
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup},
    utils::command::BotCommands,
};

mod config;

/// Prefix of mode-selection callback payloads.
const MODE_CALLBACK_PREFIX: &str = "mode_";

const START_TEXT: &str = "Hi! I'm your AI assistant. Commands:\n\
    /help — show help\n\
    /clear — clear the history\n\
    /mode — pick a reply style";

const HELP_TEXT: &str = "Bot commands:\n\
    /start — start the bot\n\
    /help — show this message\n\
    /clear — clear the history\n\
    /mode — pick a reply style\n\n\
    The bot remembers your recent context and reply style.";

const RATE_LIMIT_TEXT: &str = "Hold on a second before sending another message.";

/// Bot commands.
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Start the bot.
    Start,
    /// Show the command overview.
    Help,
    /// Clear the conversation history.
    Clear,
    /// Pick a reply style.
    Mode,
}

type SharedRelay = Arc<Relay<OpenAI>>;

/// Run the bot with long polling until the process is stopped.
pub async fn run(secrets: Secrets) -> Result<()> {
    let provider = OpenAI::new(Client::new(), &secrets.api_key)?;
    let relay: SharedRelay = Arc::new(Relay::new(RelayConfig::default(), provider));
    let bot = Bot::new(secrets.bot_token);

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(dptree::endpoint(handle_message)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    tracing::info!("starting dispatcher with long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![relay])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("dispatcher stopped");
    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    relay: SharedRelay,
) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;

    match cmd {
        Command::Start => {
            relay
                .store()
                .get_or_create_profile(user_id, Some(user.first_name.as_str()));
            bot.send_message(msg.chat.id, START_TEXT).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, HELP_TEXT).await?;
        }
        Command::Clear => {
            relay.clear(user_id);
            bot.send_message(msg.chat.id, "History cleared.").await?;
        }
        Command::Mode => {
            bot.send_message(msg.chat.id, "Pick a reply style:")
                .reply_markup(mode_keyboard())
                .await?;
        }
    }
    Ok(())
}

async fn handle_message(bot: Bot, msg: Message, relay: SharedRelay) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;
    tracing::debug!("message from user {user_id}: {} chars", text.len());

    let reply = match relay
        .handle(user_id, Some(user.first_name.as_str()), text)
        .await
    {
        Outcome::RateLimited => RATE_LIMIT_TEXT.to_owned(),
        Outcome::ModeChanged(mode) => format!("Mode switched: {}", mode.describe()),
        Outcome::Reply(reply) => reply,
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn handle_callback(bot: Bot, query: CallbackQuery, relay: SharedRelay) -> ResponseResult<()> {
    let user_id = query.from.id.0 as i64;

    if let Some(mode) = query.data.as_deref().and_then(parse_mode_callback) {
        let profile = relay.select_mode(user_id, mode);
        if let Some(message) = query.message.as_ref() {
            bot.send_message(
                message.chat().id,
                format!("Mode switched: {}", profile.mode.describe()),
            )
            .await?;
        }
    }

    bot.answer_callback_query(query.id).await?;
    Ok(())
}

/// Inline keyboard offering the four reply styles, two per row.
pub fn mode_keyboard() -> InlineKeyboardMarkup {
    let rows = ReplyMode::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|mode| {
                    InlineKeyboardButton::callback(
                        mode.label(),
                        format!("{MODE_CALLBACK_PREFIX}{}", mode.name()),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// Parse a `mode_*` callback payload.
pub fn parse_mode_callback(data: &str) -> Option<ReplyMode> {
    ReplyMode::from_name(data.strip_prefix(MODE_CALLBACK_PREFIX)?)
}
