//! All user-facing copy and keyboards in one place, so the command and
//! callback paths render identically.

use crate::{
    content::SheetRow,
    domain::Section,
    messaging::{InlineButton, InlineKeyboard},
};

pub const CALLBACK_CHECK_SUBSCRIPTION: &str = "check_subscription";
pub const CALLBACK_MAIN_MENU: &str = "main_menu";
pub const CALLBACK_SUGGEST_ARTICLE: &str = "suggest_article";

pub const MSG_SUBSCRIPTION_CONFIRMED: &str = "✅ Subscription confirmed!";
pub const MSG_NOT_SUBSCRIBED_YET: &str =
    "❌ You have not subscribed yet! Join the channel and try again.";
pub const MSG_CHECK_FAILED: &str = "Could not verify your subscription. Try again later.";
pub const MSG_FETCH_FAILED: &str = "Could not load the data. Try again later.";
pub const MSG_NOT_ADMIN: &str = "You are not allowed to run this command.";
pub const MSG_NO_BROADCAST: &str = "No broadcast message found in the sheet.";
pub const MSG_BROADCAST_DONE: &str = "Broadcast finished!";
pub const MSG_SUGGEST_PROMPT: &str =
    "Send a link to the article or guide you want to suggest:";
pub const MSG_SUGGEST_INVALID: &str =
    "That doesn't look like a link. Send a URL starting with http:// or https://.";
pub const MSG_SUGGEST_RECEIVED: &str = "Thanks! Your suggestion was passed to the admin.";

/// Prompt shown instead of content when the gate says NotSubscribed.
pub fn subscription_prompt(channel_url: &str) -> String {
    format!(
        "Hi! All the crypto guides from well-known influencers are now in one \
         place, so you won't lose them. To get access, subscribe to the \
         channel: {channel_url}\n\nAfter subscribing, press CONFIRM"
    )
}

pub fn confirm_keyboard() -> InlineKeyboard {
    InlineKeyboard::single("CONFIRM", CALLBACK_CHECK_SUBSCRIPTION)
}

pub const MAIN_MENU_TEXT: &str =
    "All guides and articles live inside.\n\nPick the topic you are after:";

/// Section grid, two buttons per row, plus the suggest-article row.
pub fn main_menu_keyboard() -> InlineKeyboard {
    let mut rows: Vec<Vec<InlineButton>> = Section::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|s| InlineButton::new(s.label(), s.callback()))
                .collect()
        })
        .collect();
    rows.push(vec![InlineButton::new(
        "SUGGEST AN ARTICLE",
        CALLBACK_SUGGEST_ARTICLE,
    )]);
    InlineKeyboard::from_rows(rows)
}

pub fn back_keyboard() -> InlineKeyboard {
    InlineKeyboard::single("Back", CALLBACK_MAIN_MENU)
}

pub fn return_to_menu_keyboard() -> InlineKeyboard {
    InlineKeyboard::single("Return to menu", CALLBACK_MAIN_MENU)
}

pub fn no_data_message(section: Section) -> String {
    format!("No entries in {} yet.", section.label())
}

/// Numbered listing of a section's rows: title, author, channel, guide link.
/// Short rows render `-` for the missing columns.
pub fn section_listing(section: Section, rows: &[SheetRow]) -> String {
    let mut out = format!("Section {}:\n\n", section.label());
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{}. \"{}\"\nauthor: {}\nchannel: {}\nguide: {}\n\n",
            idx + 1,
            row.col(0).unwrap_or("-"),
            row.col(1).unwrap_or("-"),
            row.col(2).unwrap_or("-"),
            row.col(3).unwrap_or("-"),
        ));
    }
    out
}

/// Notification relayed to the admin when a user submits a link.
pub fn admin_suggestion(user_id: i64, username: Option<&str>, text: &str) -> String {
    let who = username.unwrap_or("unknown");
    format!("New article suggestion from @{who} (id {user_id}):\n{text}")
}
