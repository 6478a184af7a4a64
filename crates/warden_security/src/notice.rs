//! User-facing notices.

use warden_core::{Identity, InlineButton, InlineKeyboard, OutboundMessage};

/// Body of the ban notice.
pub const BAN_TEXT: &str = "🚫 You are banned from using this bot.";
/// Message sent to an identity whose ban was lifted.
pub const UNBAN_TEXT: &str = "✅ You have been unbanned.\n\nYou can now use the bot again.";
/// Label of the button that opens the administrator's profile.
pub const OWNER_BUTTON: &str = "👨‍💻 OWNER 👨‍💻";
/// Label of the subscription re-check button.
pub const RETRY_BUTTON: &str = "🔄 Try Again";

/// What a blocking guard answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice body
    pub text: String,
    /// Buttons under the notice
    pub keyboard: Option<InlineKeyboard>,
    /// Whether the inciting message should be deleted
    pub delete_inciting: bool,
}

impl Notice {
    /// Outbound message carrying this notice.
    pub fn to_message(&self) -> OutboundMessage {
        let message = OutboundMessage::plain(self.text.clone());
        match &self.keyboard {
            Some(keyboard) => message.with_keyboard(keyboard.clone()),
            None => message,
        }
    }
}

fn owner_keyboard(owner: Identity) -> InlineKeyboard {
    InlineKeyboard::single(InlineButton::user(OWNER_BUTTON, owner))
}

/// Notice shown while maintenance mode is on.
pub fn maintenance_notice(mention: &str, owner: Identity) -> Notice {
    Notice {
        text: format!(
            "{mention},\n\nThis bot is currently under maintenance.\n\nContact the owner for more info."
        ),
        keyboard: Some(owner_keyboard(owner)),
        delete_inciting: true,
    }
}

/// Ban notice, with the reason line when a reason was recorded.
///
/// # Examples
///
/// ```
/// use warden_core::Identity;
/// use warden_security::ban_notice;
///
/// let notice = ban_notice(Some("spam"), Identity::new(1));
/// assert!(notice.text.ends_with("\n\nReason: spam"));
/// ```
pub fn ban_notice(reason: Option<&str>, owner: Identity) -> Notice {
    let text = match reason.filter(|reason| !reason.is_empty()) {
        Some(reason) => format!("{BAN_TEXT}\n\nReason: {reason}"),
        None => BAN_TEXT.to_string(),
    };
    Notice {
        text,
        keyboard: Some(owner_keyboard(owner)),
        delete_inciting: true,
    }
}

/// Force-subscribe notice listing invite links, two per row, then a retry
/// link back to the bot.
pub fn subscription_notice(
    mention: &str,
    invites: &[(String, String)],
    bot_username: Option<&str>,
) -> Notice {
    let buttons = invites
        .iter()
        .enumerate()
        .map(|(i, (title, link))| InlineButton::url(format!("{}. {title}", i + 1), link.clone()));
    let mut keyboard = InlineKeyboard::grid(buttons, 2);
    if let Some(username) = bot_username {
        keyboard.push_row(vec![InlineButton::url(
            RETRY_BUTTON,
            format!("https://t.me/{username}?start=start"),
        )]);
    }
    Notice {
        text: format!(
            "{mention}, You haven't joined my channel yet.\nPlease join using the buttons below."
        ),
        keyboard: Some(keyboard),
        delete_inciting: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::ButtonTarget;

    #[test]
    fn test_ban_notice_without_reason() {
        let notice = ban_notice(None, Identity::new(9));
        assert_eq!(notice.text, BAN_TEXT);
        let keyboard = notice.keyboard.unwrap();
        assert_eq!(keyboard.rows[0][0].target, ButtonTarget::User(Identity::new(9)));
    }

    #[test]
    fn test_empty_reason_is_omitted() {
        assert_eq!(ban_notice(Some(""), Identity::new(9)).text, BAN_TEXT);
    }

    #[test]
    fn test_subscription_layout() {
        let invites: Vec<(String, String)> = (1..=3)
            .map(|i| (format!("Chan {i}"), format!("https://t.me/+{i}")))
            .collect();
        let notice = subscription_notice("Ada", &invites, Some("warden_bot"));
        let rows = notice.keyboard.unwrap().rows;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1][0].text, "3. Chan 3");
        assert_eq!(
            rows[2][0].target,
            ButtonTarget::Url("https://t.me/warden_bot?start=start".into())
        );
        assert!(!notice.delete_inciting);
    }
}
