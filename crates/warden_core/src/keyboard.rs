//! Inline button grids attached to outbound messages.

use crate::Identity;
use serde::{Deserialize, Serialize};

/// Where an inline button leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTarget {
    /// Open a URL
    Url(String),
    /// Open a user's profile
    User(Identity),
}

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    /// Button label
    pub text: String,
    /// Button destination
    pub target: ButtonTarget,
}

impl InlineButton {
    /// Button that opens a URL.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: ButtonTarget::Url(url.into()),
        }
    }

    /// Button that opens a user's profile.
    pub fn user(text: impl Into<String>, user: Identity) -> Self {
        Self {
            text: text.into(),
            target: ButtonTarget::User(user),
        }
    }
}

/// Rows of inline buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    /// Button rows, top to bottom
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    /// Keyboard holding a single button.
    pub fn single(button: InlineButton) -> Self {
        Self {
            rows: vec![vec![button]],
        }
    }

    /// Lay buttons out left to right, `per_row` at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::{InlineButton, InlineKeyboard};
    ///
    /// let buttons = (1..=3).map(|i| InlineButton::url(i.to_string(), "https://t.me/x"));
    /// let keyboard = InlineKeyboard::grid(buttons, 2);
    /// assert_eq!(keyboard.rows.len(), 2);
    /// assert_eq!(keyboard.rows[1].len(), 1);
    /// ```
    pub fn grid(buttons: impl IntoIterator<Item = InlineButton>, per_row: usize) -> Self {
        let per_row = per_row.max(1);
        let mut rows: Vec<Vec<InlineButton>> = Vec::new();
        for button in buttons {
            match rows.last_mut() {
                Some(row) if row.len() < per_row => row.push(button),
                _ => rows.push(vec![button]),
            }
        }
        Self { rows }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<InlineButton>) {
        self.rows.push(row);
    }

    /// Number of buttons across all rows.
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
