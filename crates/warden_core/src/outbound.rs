//! Outbound message payloads.

use crate::InlineKeyboard;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of payload carried by a send.
///
/// Every send primitive of the chat transport maps to one of these kinds; the
/// outbound gate treats them all as one logical send.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayloadKind {
    /// Plain text message
    Text,
    /// File attachment
    Document,
    /// Video
    Video,
    /// Sticker
    Sticker,
    /// Photo
    Photo,
    /// Audio track
    Audio,
    /// Animation (GIF)
    Animation,
}

/// Binary or referenced content attached to a send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attachment {
    /// Raw bytes uploaded with a file name
    Bytes {
        /// File name shown to the recipient
        file_name: String,
        /// File contents
        data: Vec<u8>,
    },
    /// Transport-side file id or URL
    Reference(String),
}

/// A message on its way to a destination.
///
/// # Examples
///
/// ```
/// use warden_core::{OutboundMessage, PayloadKind};
///
/// let msg = OutboundMessage::plain("hello");
/// assert_eq!(*msg.kind(), PayloadKind::Text);
/// assert_eq!(msg.text().as_deref(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct OutboundMessage {
    /// Payload kind
    kind: PayloadKind,
    /// Message body for text, caption for everything else
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Attached content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment: Option<Attachment>,
    /// Inline buttons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyboard: Option<InlineKeyboard>,
}

impl OutboundMessage {
    /// Plain text message.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            text: Some(text.into()),
            attachment: None,
            keyboard: None,
        }
    }

    /// Document uploaded from memory.
    pub fn document(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: PayloadKind::Document,
            text: None,
            attachment: Some(Attachment::Bytes {
                file_name: file_name.into(),
                data: data.into(),
            }),
            keyboard: None,
        }
    }

    /// Media of the given kind referenced by transport file id or URL.
    pub fn media(kind: PayloadKind, reference: impl Into<String>) -> Self {
        Self {
            kind,
            text: None,
            attachment: Some(Attachment::Reference(reference.into())),
            keyboard: None,
        }
    }
}
