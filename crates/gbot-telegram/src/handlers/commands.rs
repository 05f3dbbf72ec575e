use std::sync::Arc;

use teloxide::prelude::*;

use tracing::error;

use gbot_core::domain::{ChatId, Section, UserId};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (cmd, _args) = parse_command(text);
    let user_id = UserId(user.id.0 as i64);
    let chat = ChatId(msg.chat.id.0);

    let result = match cmd.as_str() {
        "start" | "menu" => state.service.open_main_menu(user_id, chat).await,
        "broadcast" => state.service.run_broadcast(user_id, chat).await,
        "debug" => state.service.debug_report(user_id, chat).await,
        other => match Section::from_command(other) {
            Some(section) => state.service.serve_section(user_id, chat, section).await,
            // Unknown commands fall through silently.
            None => return Ok(()),
        },
    };

    if let Err(e) = result {
        error!("command /{cmd} failed for user {}: {e}", user_id.0);
    }

    Ok(())
}
