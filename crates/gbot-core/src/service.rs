use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    content::{join_broadcast_rows, ContentPort},
    domain::{ChatId, MessageRef, Section, UserId, BROADCAST_RANGE},
    gate::{SubscriptionGate, SubscriptionStatus},
    messaging::MessagingPort,
    render,
    state::{ConversationStore, SubmissionState},
    store::UserStore,
    utils::contains_link,
    Result,
};

/// Pause between the "subscription confirmed" reply and the menu render, so
/// the confirmation registers before the menu arrives.
const CONFIRM_MENU_DELAY: Duration = Duration::from_secs(1);

/// The application flows, composed over the ports. Handlers in the Telegram
/// adapter are thin: they parse the update and call exactly one method here.
pub struct GuideService {
    messenger: Arc<dyn MessagingPort>,
    content: Arc<dyn ContentPort>,
    gate: SubscriptionGate,
    users: UserStore,
    convo: ConversationStore,
    admin: UserId,
    channel: String,
    channel_url: String,
    started_at: DateTime<Utc>,
}

impl GuideService {
    pub fn new(
        messenger: Arc<dyn MessagingPort>,
        content: Arc<dyn ContentPort>,
        gate: SubscriptionGate,
        users: UserStore,
        admin: UserId,
        channel: String,
        channel_url: String,
    ) -> Self {
        Self {
            messenger,
            content,
            gate,
            users,
            convo: ConversationStore::new(),
            admin,
            channel,
            channel_url,
            started_at: Utc::now(),
        }
    }

    /// Gate the user; on NotSubscribed/CheckFailed, send the standard reply
    /// and report `false` so the caller abandons the action.
    async fn pass_gate(&self, user: UserId, chat: ChatId) -> Result<bool> {
        match self.gate.check(user).await {
            SubscriptionStatus::Subscribed => Ok(true),
            SubscriptionStatus::NotSubscribed => {
                self.messenger
                    .send_keyboard(
                        chat,
                        &render::subscription_prompt(&self.channel_url),
                        render::confirm_keyboard(),
                        false,
                    )
                    .await?;
                Ok(false)
            }
            SubscriptionStatus::CheckFailed => {
                self.messenger.send_text(chat, render::MSG_CHECK_FAILED).await?;
                Ok(false)
            }
        }
    }

    async fn send_main_menu(&self, chat: ChatId) -> Result<()> {
        self.messenger
            .send_keyboard(
                chat,
                render::MAIN_MENU_TEXT,
                render::main_menu_keyboard(),
                false,
            )
            .await?;
        Ok(())
    }

    /// `/start` and `/menu`: gate, register the caller for broadcasts, render
    /// the menu. Registration failure must not take the menu down with it.
    pub async fn open_main_menu(&self, user: UserId, chat: ChatId) -> Result<()> {
        if !self.pass_gate(user, chat).await? {
            return Ok(());
        }

        match self.users.insert(user) {
            Ok(true) => info!("registered user {}", user.0),
            Ok(false) => {}
            Err(e) => warn!("failed to persist user {}: {e}", user.0),
        }

        self.send_main_menu(chat).await
    }

    /// Section commands and their button twins: gate, fetch, render.
    pub async fn serve_section(&self, user: UserId, chat: ChatId, section: Section) -> Result<()> {
        if !self.pass_gate(user, chat).await? {
            return Ok(());
        }

        let rows = match self.content.fetch_range(&section.range()).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("fetch for section {} failed: {e}", section.label());
                self.messenger.send_text(chat, render::MSG_FETCH_FAILED).await?;
                return Ok(());
            }
        };

        if rows.is_empty() {
            self.messenger
                .send_text(chat, &render::no_data_message(section))
                .await?;
            return Ok(());
        }

        self.messenger
            .send_keyboard(
                chat,
                &render::section_listing(section, &rows),
                render::back_keyboard(),
                true,
            )
            .await?;
        Ok(())
    }

    /// The CONFIRM button: re-check, then either the menu or a nudge.
    pub async fn confirm_subscription(&self, user: UserId, chat: ChatId) -> Result<()> {
        match self.gate.check(user).await {
            SubscriptionStatus::Subscribed => {
                self.messenger
                    .send_text(chat, render::MSG_SUBSCRIPTION_CONFIRMED)
                    .await?;
                tokio::time::sleep(CONFIRM_MENU_DELAY).await;
                self.send_main_menu(chat).await
            }
            SubscriptionStatus::NotSubscribed => {
                self.messenger
                    .send_text(chat, render::MSG_NOT_SUBSCRIBED_YET)
                    .await?;
                Ok(())
            }
            SubscriptionStatus::CheckFailed => {
                self.messenger.send_text(chat, render::MSG_CHECK_FAILED).await?;
                Ok(())
            }
        }
    }

    /// The SUGGEST AN ARTICLE button: subscribers enter the awaiting-link
    /// state and get prompted for a URL.
    pub async fn start_suggestion(&self, user: UserId, chat: ChatId) -> Result<()> {
        if !self.pass_gate(user, chat).await? {
            return Ok(());
        }

        self.convo.begin_submission(user);
        self.messenger
            .send_text(chat, render::MSG_SUGGEST_PROMPT)
            .await?;
        Ok(())
    }

    /// Plain (non-command) text. Ignored unless the sender is mid-suggestion;
    /// then it is either the link (confirm + relay to the admin) or chatter
    /// (corrective prompt, state preserved).
    pub async fn handle_free_text(
        &self,
        user: UserId,
        username: Option<&str>,
        chat: ChatId,
        text: &str,
    ) -> Result<()> {
        if self.convo.submission(user) != SubmissionState::AwaitingLink {
            return Ok(());
        }

        if !contains_link(text) {
            self.messenger
                .send_text(chat, render::MSG_SUGGEST_INVALID)
                .await?;
            return Ok(());
        }

        self.convo.complete_submission(user);
        self.messenger
            .send_keyboard(
                chat,
                render::MSG_SUGGEST_RECEIVED,
                render::return_to_menu_keyboard(),
                false,
            )
            .await?;

        // The sender already has their confirmation; a failed relay is
        // logged, not surfaced (accepted silent-loss edge case).
        let note = render::admin_suggestion(user.0, username, text);
        if let Err(e) = self.messenger.send_text(ChatId(self.admin.0), &note).await {
            warn!("failed to relay suggestion from user {} to admin: {e}", user.0);
        }
        Ok(())
    }

    /// The Back / Return-to-menu button: dismiss the triggering message and,
    /// when the user came out of the suggestion flow, re-render the menu.
    pub async fn return_to_menu(
        &self,
        user: UserId,
        chat: ChatId,
        trigger: Option<MessageRef>,
    ) -> Result<()> {
        if let Some(msg) = trigger {
            if let Err(e) = self.messenger.delete_message(msg).await {
                warn!("failed to delete message {:?}: {e}", msg.message_id);
            }
        }

        if self.convo.take_return_flag(user) {
            self.send_main_menu(chat).await?;
        }
        Ok(())
    }

    /// `/broadcast`: admin-only fan-out of the sheet's broadcast message to
    /// every stored user. Per-recipient failures are logged and skipped; the
    /// admin always gets the completion reply.
    pub async fn run_broadcast(&self, caller: UserId, chat: ChatId) -> Result<()> {
        if caller != self.admin {
            self.messenger.send_text(chat, render::MSG_NOT_ADMIN).await?;
            return Ok(());
        }

        let rows = match self.content.fetch_range(BROADCAST_RANGE).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("broadcast fetch failed: {e}");
                self.messenger.send_text(chat, render::MSG_FETCH_FAILED).await?;
                return Ok(());
            }
        };

        let Some(message) = join_broadcast_rows(&rows) else {
            self.messenger.send_text(chat, render::MSG_NO_BROADCAST).await?;
            return Ok(());
        };

        let recipients = self.users.all();
        info!("broadcasting to {} users", recipients.len());
        for target in recipients {
            if let Err(e) = self.messenger.send_text(ChatId(target.0), &message).await {
                warn!("broadcast to user {} failed: {e}", target.0);
            }
        }

        self.messenger.send_text(chat, render::MSG_BROADCAST_DONE).await?;
        Ok(())
    }

    /// `/debug`: admin-only runtime snapshot.
    pub async fn debug_report(&self, caller: UserId, chat: ChatId) -> Result<()> {
        if caller != self.admin {
            self.messenger.send_text(chat, render::MSG_NOT_ADMIN).await?;
            return Ok(());
        }

        let uptime_min = (Utc::now() - self.started_at).num_minutes();
        let report = format!(
            "channel: {}\nstored users: {}\npending submissions: {}\nstarted: {}\nuptime: {} min",
            self.channel,
            self.users.len(),
            self.convo.awaiting_count(),
            self.started_at.to_rfc3339(),
            uptime_min,
        );
        self.messenger.send_text(chat, &report).await?;
        Ok(())
    }
}
