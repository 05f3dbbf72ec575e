use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration, loaded from the environment (with `.env` support).
///
/// Every required value missing or malformed is a startup-fatal
/// `Error::Config`; nothing here is validated lazily.
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,
    /// Channel the subscription gate checks, normalized to `@name`.
    pub required_channel: String,
    /// The single administrator allowed to run /broadcast and /debug.
    pub admin_id: i64,

    /// Google Sheets document id.
    pub spreadsheet_id: String,
    /// API key for the read-only values endpoint.
    pub sheets_api_key: String,
    /// HTTP timeout for sheet fetches.
    pub sheets_timeout: Duration,

    /// JSON file holding the list of user ids seen by /start and /menu.
    pub user_ids_file: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = require_str("BOT_TOKEN")?;
        let required_channel = normalize_channel(&require_str("REQUIRED_CHANNEL")?);
        let admin_id = require_str("ADMIN_ID")?
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::Config("ADMIN_ID must be a numeric user id".to_string()))?;

        let spreadsheet_id = require_str("SPREADSHEET_ID")?;
        let sheets_api_key = require_str("SHEETS_API_KEY")?;
        let sheets_timeout = Duration::from_millis(env_u64("SHEETS_TIMEOUT_MS").unwrap_or(15_000));

        let user_ids_file = env::var_os("USER_IDS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("user_ids.json"));

        Ok(Self {
            bot_token,
            required_channel,
            admin_id,
            spreadsheet_id,
            sheets_api_key,
            sheets_timeout,
            user_ids_file,
        })
    }

    /// Public join link for the required channel.
    pub fn channel_url(&self) -> String {
        format!("https://t.me/{}", self.required_channel.trim_start_matches('@'))
    }
}

fn require_str(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn normalize_channel(raw: &str) -> String {
    let name = raw.trim().trim_start_matches('@');
    format!("@{name}")
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
