use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, types::BotCommand};

use tracing::{info, warn};

use gbot_core::{
    config::Config,
    content::ContentPort,
    domain::{Section, UserId},
    gate::SubscriptionGate,
    messaging::MessagingPort,
    service::GuideService,
    store::UserStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub service: Arc<GuideService>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, content: Arc<dyn ContentPort>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("guides bot started: @{}", me.username());
    }

    let messenger = Arc::new(TelegramMessenger::new(bot.clone()));
    let gate = SubscriptionGate::new(messenger.clone(), cfg.required_channel.clone());

    let users = UserStore::load(cfg.user_ids_file.clone())?;
    info!(
        "loaded {} stored users from {}",
        users.len(),
        cfg.user_ids_file.display()
    );

    let service = Arc::new(GuideService::new(
        messenger.clone(),
        content,
        gate,
        users,
        UserId(cfg.admin_id),
        cfg.required_channel.clone(),
        cfg.channel_url(),
    ));

    register_commands(&bot).await;

    let state = Arc::new(AppState {
        cfg,
        service,
        messenger: messenger.clone(),
    });

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

/// Advertise the public command list (best-effort). The admin-only commands
/// are deliberately not listed.
async fn register_commands(bot: &Bot) {
    let mut commands = vec![
        BotCommand::new("start", "Launch the bot"),
        BotCommand::new("menu", "Open the main menu"),
    ];
    for section in Section::ALL {
        commands.push(BotCommand::new(
            section.command(),
            format!("Open the {} section", section.label()),
        ));
    }

    if let Err(e) = bot.set_my_commands(commands).await {
        warn!("failed to register commands: {e}");
    }
}
