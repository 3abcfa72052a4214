//! Wire types for the chat-completions endpoint.
//!
//! The request body mirrors the protocol exactly: `stream` and `stop`
//! are omitted entirely when unset, never sent as `null`.

use serde::{Deserialize, Serialize};

use gptfn_types::chat::{ChatModel, CompletionRequest, Message};

/// POST body for `/v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody {
    pub model: ChatModel,
    pub messages: Vec<Message>,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl ChatCompletionBody {
    /// Build the wire body from a domain request. Only the engine sets
    /// the `stream` flag; single-shot requests omit it.
    pub fn from_request(request: CompletionRequest, stream: bool) -> Self {
        Self {
            model: request.model,
            messages: request.messages,
            temperature: request.temperature,
            stream: stream.then_some(true),
            stop: request.stop,
        }
    }
}

/// Non-streaming response body.
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

/// One decoded streaming event payload.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkChoice {
    pub delta: Delta,
}

/// Incremental fragment of the in-progress answer. Role-only and
/// heartbeat events carry no `content` key.
#[derive(Debug, Deserialize)]
pub struct Delta {
    pub content: Option<String>,
}
