/// Inline keyboard, rows of buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

impl InlineKeyboard {
    pub fn from_rows(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    /// Convenience for the common one-button keyboards (back, confirm).
    pub fn single(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            rows: vec![vec![InlineButton::new(label, data)]],
        }
    }
}
