//! Prompt serialization: message list -> chat markup -> token ids.
//!
//! Rendering is pure text assembly from the model's markers; counting
//! delegates to the [`TokenEncoder`] port. `token_count` is always
//! `serialize(..).len()` -- there is no separate estimation path.

use std::sync::Arc;

use gptfn_types::chat::{ChatModel, Message};

use crate::encoder::TokenEncoder;

/// Render a message list into the chat markup the model expects.
///
/// Each message becomes `<start><role><sep><content><end>`; the pieces,
/// plus a trailing open `<start>assistant<sep>` turn, are joined with
/// the model's message separator.
pub fn render_transcript(messages: &[Message], model: ChatModel) -> String {
    let markers = model.markers();

    let mut pieces: Vec<String> = messages
        .iter()
        .map(|message| {
            format!(
                "{}{}{}{}{}",
                markers.turn_start, message.role, markers.turn_sep, message.content, markers.turn_end
            )
        })
        .collect();
    pieces.push(format!("{}assistant{}", markers.turn_start, markers.turn_sep));

    pieces.join(markers.message_sep)
}

/// Serializes prospective prompts into model-specific token counts.
#[derive(Clone)]
pub struct PromptSerializer {
    encoder: Arc<dyn TokenEncoder>,
}

impl PromptSerializer {
    pub fn new(encoder: Arc<dyn TokenEncoder>) -> Self {
        Self { encoder }
    }

    /// The exact token id sequence the model would receive.
    pub fn serialize(&self, messages: &[Message], model: ChatModel) -> Vec<u32> {
        self.encoder.encode(&render_transcript(messages, model))
    }

    /// Number of prompt tokens for this message list.
    pub fn token_count(&self, messages: &[Message], model: ChatModel) -> usize {
        self.serialize(messages, model).len()
    }
}
