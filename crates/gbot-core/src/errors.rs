/// Core error type for the guides bot.
///
/// Adapter crates map their specific errors into this type so the bot core can
/// handle failures consistently (user-facing message vs log-and-continue).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sheets error: {0}")]
    Sheets(String),

    #[error("telegram error: {0}")]
    Telegram(String),
}

pub type Result<T> = std::result::Result<T, Error>;
