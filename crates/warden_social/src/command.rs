//! Admin command parsing.

use warden_core::Identity;
use warden_error::{CommandError, CommandErrorKind};

/// Result type for admin command parsing.
pub type CommandResult<T> = Result<T, CommandError>;

/// A privileged moderation command.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AdminCommand {
    /// Ban an identity, optionally with a reason
    Ban {
        /// Identity to ban
        target: Identity,
        /// Free-text reason shown to the banned identity
        reason: Option<String>,
    },
    /// Lift a ban
    Unban {
        /// Identity to unban
        target: Identity,
    },
    /// List active bans
    ListBanned,
    /// Switch maintenance mode
    Maintenance(bool),
    /// Drop every recorded join request
    PurgeJoinRequests,
}

const BAN_USAGE: &str = "/ban user_id or channel_id [reason]";
const UNBAN_USAGE: &str = "/unban user_id or channel_id";
const MAINTENANCE_USAGE: &str = "/maintenance [on/off]";

/// Split off the first whitespace-delimited token.
fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (text, ""),
    }
}

/// Command name without the leading slash or `@botname` suffix.
///
/// Tokens without a leading slash are plain text, not commands.
fn command_name(token: &str) -> Option<&str> {
    let token = token.strip_prefix('/')?;
    token.split('@').next()
}

fn parse_identity(token: &str) -> CommandResult<Identity> {
    token
        .parse()
        .map_err(|_| CommandError::new(CommandErrorKind::InvalidIdentity(token.to_string())))
}

impl AdminCommand {
    /// Whether the text invokes one of the admin commands, well-formed or not.
    pub fn is_admin_command(text: &str) -> bool {
        let (head, _) = split_token(text);
        matches!(
            command_name(head),
            Some("ban" | "unban" | "banned" | "list-banned" | "maintenance" | "delreq"
                | "purge-join-requests")
        )
    }

    /// Parse a command line such as `/ban 42 spamming`.
    ///
    /// # Errors
    ///
    /// Returns a usage error when arguments are missing, `InvalidIdentity`
    /// when an identity is not an integer, `InvalidToggle` for a maintenance
    /// argument other than `on`/`off`, and `UnknownCommand` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::Identity;
    /// use warden_social::AdminCommand;
    ///
    /// let command = AdminCommand::parse("/ban -1001 raid bot").unwrap();
    /// assert_eq!(
    ///     command,
    ///     AdminCommand::Ban { target: Identity::new(-1001), reason: Some("raid bot".into()) }
    /// );
    /// ```
    pub fn parse(text: &str) -> CommandResult<Self> {
        let (head, args) = split_token(text);
        let Some(name) = command_name(head) else {
            return Err(CommandError::new(CommandErrorKind::UnknownCommand(
                head.to_string(),
            )));
        };
        match name {
            "ban" => {
                let (target, reason) = split_token(args);
                if target.is_empty() {
                    return Err(CommandError::new(CommandErrorKind::Usage(BAN_USAGE)));
                }
                let reason = reason.trim_end();
                Ok(Self::Ban {
                    target: parse_identity(target)?,
                    reason: (!reason.is_empty()).then(|| reason.to_string()),
                })
            }
            "unban" => {
                let target = args.trim();
                if target.is_empty() {
                    return Err(CommandError::new(CommandErrorKind::Usage(UNBAN_USAGE)));
                }
                Ok(Self::Unban {
                    target: parse_identity(target)?,
                })
            }
            "banned" | "list-banned" => Ok(Self::ListBanned),
            "maintenance" => match args.trim().to_lowercase().as_str() {
                "" => Err(CommandError::new(CommandErrorKind::Usage(MAINTENANCE_USAGE))),
                "on" => Ok(Self::Maintenance(true)),
                "off" => Ok(Self::Maintenance(false)),
                other => Err(CommandError::new(CommandErrorKind::InvalidToggle(
                    other.to_string(),
                ))),
            },
            "delreq" | "purge-join-requests" => Ok(Self::PurgeJoinRequests),
            other => Err(CommandError::new(CommandErrorKind::UnknownCommand(
                other.to_string(),
            ))),
        }
    }
}
