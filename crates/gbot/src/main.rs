use std::sync::Arc;

use gbot_core::{config::Config, content::ContentPort, logging};
use gbot_sheets::SheetsClient;

#[tokio::main]
async fn main() -> Result<(), gbot_core::Error> {
    logging::init("gbot");

    let cfg = Arc::new(Config::load()?);

    let content: Arc<dyn ContentPort> = Arc::new(SheetsClient::new(
        cfg.spreadsheet_id.clone(),
        cfg.sheets_api_key.clone(),
        cfg.sheets_timeout,
    )?);

    gbot_telegram::router::run_polling(cfg, content)
        .await
        .map_err(|e| gbot_core::Error::Telegram(format!("bot failed: {e}")))?;

    Ok(())
}
