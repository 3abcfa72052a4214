//! Chat message and model types.
//!
//! `ChatModel` is a closed enumeration: every supported model carries a
//! context ceiling and the four textual markers its chat markup uses.
//! The markers matter only to the prompt serializer; the wire protocol
//! never sees them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single role-tagged message. Immutable once constructed; ordering
/// within a sequence is conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// The chat markup markers a model expects when its prompt is rendered
/// to text for token counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMarkers {
    /// Opens a turn, immediately before the role name.
    pub turn_start: &'static str,
    /// Closes a turn, immediately after the content.
    pub turn_end: &'static str,
    /// Separates the role name from the content within a turn.
    pub turn_sep: &'static str,
    /// Joins rendered turns together.
    pub message_sep: &'static str,
}

/// Supported chat models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl ChatModel {
    /// The identifier sent over the wire.
    pub fn id(&self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
            ChatModel::Gpt4 => "gpt-4",
        }
    }

    /// Maximum context window, in tokens.
    pub fn max_context_tokens(&self) -> usize {
        match self {
            ChatModel::Gpt35Turbo => 4_096,
            ChatModel::Gpt4 => 8_192,
        }
    }

    /// Markers used when serializing a message list for this model.
    pub fn markers(&self) -> ChatMarkers {
        match self {
            ChatModel::Gpt35Turbo => ChatMarkers {
                turn_start: "<|im_start|>",
                turn_end: "<|im_end|>",
                turn_sep: "\n",
                message_sep: "\n",
            },
            ChatModel::Gpt4 => ChatMarkers {
                turn_start: "<|im_start|>",
                turn_end: "<|im_end|>",
                turn_sep: "<|im_sep|>",
                message_sep: "",
            },
        }
    }

    /// Role used for the instruction message.
    ///
    /// gpt-3.5-turbo does not reliably honor a dedicated system role, so
    /// its instructions go out as a `user` message. This is a model
    /// capability, not caller configuration.
    pub fn instruction_role(&self) -> Role {
        match self {
            ChatModel::Gpt35Turbo => Role::User,
            ChatModel::Gpt4 => Role::System,
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChatModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-3.5-turbo" => Ok(ChatModel::Gpt35Turbo),
            "gpt-4" => Ok(ChatModel::Gpt4),
            other => Err(format!("unsupported chat model: '{other}'")),
        }
    }
}

/// Domain-level request handed to a chat engine.
///
/// The wire body (with the `stream` flag) is built from this by the
/// engine implementation; callers never set `stream` themselves.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: ChatModel,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub stop: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Assistant);
    }

    #[test]
    fn test_message_serde() {
        let msg = Message::new(Role::User, "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn test_model_id_roundtrip() {
        for model in [ChatModel::Gpt35Turbo, ChatModel::Gpt4] {
            let parsed: ChatModel = model.id().parse().unwrap();
            assert_eq!(model, parsed);
        }
        assert!("gpt-5".parse::<ChatModel>().is_err());
    }

    #[test]
    fn test_model_serde_uses_wire_id() {
        let json = serde_json::to_string(&ChatModel::Gpt35Turbo).unwrap();
        assert_eq!(json, "\"gpt-3.5-turbo\"");
    }

    #[test]
    fn test_context_ceilings() {
        assert_eq!(ChatModel::Gpt35Turbo.max_context_tokens(), 4_096);
        assert_eq!(ChatModel::Gpt4.max_context_tokens(), 8_192);
    }

    #[test]
    fn test_markers_per_model() {
        let m35 = ChatModel::Gpt35Turbo.markers();
        assert_eq!(m35.turn_start, "<|im_start|>");
        assert_eq!(m35.turn_end, "<|im_end|>");
        assert_eq!(m35.turn_sep, "\n");
        assert_eq!(m35.message_sep, "\n");

        let m4 = ChatModel::Gpt4.markers();
        assert_eq!(m4.turn_sep, "<|im_sep|>");
        assert_eq!(m4.message_sep, "");
    }

    #[test]
    fn test_instruction_role() {
        assert_eq!(ChatModel::Gpt35Turbo.instruction_role(), Role::User);
        assert_eq!(ChatModel::Gpt4.instruction_role(), Role::System);
    }
}
