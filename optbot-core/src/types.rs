//! Core types: user, chat, message, handler response, and the CommandHandler trait.

use async_trait::async_trait;

use crate::command::Command;

/// User identity (id, username, names).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound text message with user and chat.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

/// Outcome of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Handled; the body is the text that was delivered to the user.
    Reply(String),
    /// Handled, but the request failed and a fallback message (if any) was sent instead.
    Stop,
    /// Not a command this router knows; nothing was sent.
    Ignore,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A handler bound to a single command name (e.g. `start`, `ask`).
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name without the leading slash, lowercase.
    fn command(&self) -> &str;

    /// One-line description shown in the gateway's command menu.
    fn description(&self) -> &str;

    /// Handles one invocation. Implementations send their own replies through a [`crate::Bot`].
    async fn handle(
        &self,
        message: &Message,
        command: &Command,
    ) -> crate::error::Result<HandlerResponse>;
}
