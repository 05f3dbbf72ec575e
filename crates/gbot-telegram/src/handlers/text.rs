use std::sync::Arc;

use teloxide::prelude::*;

use tracing::error;

use gbot_core::domain::{ChatId, UserId};

use crate::router::AppState;

/// Plain (non-command) text. The service decides whether it is a pending
/// article submission or unrelated chatter to ignore.
pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let user_id = UserId(user.id.0 as i64);
    let chat = ChatId(msg.chat.id.0);
    let username = user.username.as_deref();

    if let Err(e) = state
        .service
        .handle_free_text(user_id, username, chat, text)
        .await
    {
        error!("free-text handling failed for user {}: {e}", user_id.0);
    }

    Ok(())
}
