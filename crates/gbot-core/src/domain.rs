/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Sheet range holding the broadcast message (whole column A).
pub const BROADCAST_RANGE: &str = "broadcast!A1:A";

/// A content category backed by a fixed sheet range.
///
/// Each section maps 1:1 to a bot command, an inline-keyboard callback id and
/// a `TAB!A2:D` range on the spreadsheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Basic,
    Memecoins,
    Retro,
    Coding,
    Defi,
    Ai,
    Nft,
    Media,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Basic,
        Section::Memecoins,
        Section::Retro,
        Section::Coding,
        Section::Defi,
        Section::Ai,
        Section::Nft,
        Section::Media,
    ];

    /// Human label, also the spreadsheet tab name.
    pub fn label(self) -> &'static str {
        match self {
            Section::Basic => "BASIC",
            Section::Memecoins => "MEMECOINS",
            Section::Retro => "RETRO",
            Section::Coding => "CODING",
            Section::Defi => "DEFI",
            Section::Ai => "AI",
            Section::Nft => "NFT",
            Section::Media => "MEDIA",
        }
    }

    /// Data range for this section: header row skipped, four columns.
    pub fn range(self) -> String {
        format!("{}!A2:D", self.label())
    }

    /// Bot command (without the leading `/`).
    pub fn command(self) -> &'static str {
        match self {
            Section::Basic => "base",
            Section::Memecoins => "memecoins",
            Section::Retro => "retro",
            Section::Coding => "coding",
            Section::Defi => "defi",
            Section::Ai => "ai",
            Section::Nft => "nft",
            Section::Media => "media",
        }
    }

    /// Inline-keyboard callback id.
    pub fn callback(self) -> &'static str {
        match self {
            Section::Basic => "basic",
            Section::Memecoins => "memecoins",
            Section::Retro => "retro",
            Section::Coding => "coding",
            Section::Defi => "defi",
            Section::Ai => "ai",
            Section::Nft => "nft",
            Section::Media => "media",
        }
    }

    pub fn from_command(cmd: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.command() == cmd)
    }

    pub fn from_callback(data: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.callback() == data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_and_callback_tables_are_consistent() {
        for s in Section::ALL {
            assert_eq!(Section::from_command(s.command()), Some(s));
            assert_eq!(Section::from_callback(s.callback()), Some(s));
        }
        assert_eq!(Section::from_command("basic"), None); // command is /base
        assert_eq!(Section::from_callback("base"), None);
        assert_eq!(Section::from_command("broadcast"), None);
    }

    #[test]
    fn ranges_skip_the_header_row() {
        assert_eq!(Section::Basic.range(), "BASIC!A2:D");
        assert_eq!(Section::Defi.range(), "DEFI!A2:D");
    }
}
