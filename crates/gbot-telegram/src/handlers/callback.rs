use std::sync::Arc;

use teloxide::{prelude::*, types::CallbackQuery};

use tracing::error;

use gbot_core::{
    domain::{ChatId, MessageId, MessageRef, Section, UserId},
    render,
};

use crate::router::AppState;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let data = q.data.clone().unwrap_or_default();
    let user_id = UserId(q.from.id.0 as i64);

    // Answer the query up front so the button stops spinning regardless of
    // how the flow below goes.
    if let Err(e) = state.messenger.answer_callback(&q.id, None).await {
        error!("failed to answer callback {}: {e}", q.id);
    }

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    if data.is_empty() {
        return Ok(());
    }

    let chat = ChatId(message.chat.id.0);
    let trigger = MessageRef {
        chat_id: chat,
        message_id: MessageId(message.id.0),
    };

    let result = match data.as_str() {
        render::CALLBACK_CHECK_SUBSCRIPTION => {
            state.service.confirm_subscription(user_id, chat).await
        }
        render::CALLBACK_MAIN_MENU => {
            state.service.return_to_menu(user_id, chat, Some(trigger)).await
        }
        render::CALLBACK_SUGGEST_ARTICLE => state.service.start_suggestion(user_id, chat).await,
        other => match Section::from_callback(other) {
            Some(section) => state.service.serve_section(user_id, chat, section).await,
            None => return Ok(()),
        },
    };

    if let Err(e) = result {
        error!("callback '{data}' failed for user {}: {e}", user_id.0);
    }

    Ok(())
}
