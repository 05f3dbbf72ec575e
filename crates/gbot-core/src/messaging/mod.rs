pub mod port;
pub mod types;

pub use port::MessagingPort;
pub use types::{InlineButton, InlineKeyboard};
