//! Consumer-facing assembly of a [`PromptFn`].
//!
//! The builder owns the defaults (temperature 0, budget derived from
//! the model, credentials from the environment) and wires the concrete
//! engine, the shared cl100k encoder, and the prompt serializer
//! together. Library users who need a different engine or encoder can
//! call [`PromptFn::wrap`] directly instead.

use gptfn_core::serializer::PromptSerializer;
use gptfn_core::wrap::{PromptFn, ReturnType};
use gptfn_types::chat::ChatModel;
use gptfn_types::error::Error;

use crate::credentials::Credentials;
use crate::encoder::Cl100kEncoder;
use crate::openai::client::OpenAiEngine;

/// Builder for a chat-completions-backed [`PromptFn`].
pub struct PromptFnBuilder {
    model: ChatModel,
    temperature: f64,
    max_prompt_tokens: Option<usize>,
    endpoint: Option<String>,
    credentials: Option<Credentials>,
}

impl PromptFnBuilder {
    pub fn new(model: ChatModel) -> Self {
        Self {
            model,
            temperature: 0.0,
            max_prompt_tokens: None,
            endpoint: None,
            credentials: None,
        }
    }

    /// Sampling temperature, 0 by default.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Explicit prompt-token ceiling instead of the model default.
    pub fn max_prompt_tokens(mut self, limit: usize) -> Self {
        self.max_prompt_tokens = Some(limit);
        self
    }

    /// Endpoint override, mainly for tests and proxies.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Explicit credentials instead of the process environment.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Compile a specification into a callable with answer shape `R`.
    ///
    /// Reads `OPENAI_API_KEY` unless credentials were supplied, so this
    /// is the first point a misconfigured environment surfaces.
    pub fn wrap<R: ReturnType>(self, spec: &str) -> Result<PromptFn<R, OpenAiEngine>, Error> {
        let mut engine = match self.credentials {
            Some(credentials) => OpenAiEngine::new(credentials),
            None => OpenAiEngine::from_env()?,
        };
        if let Some(endpoint) = self.endpoint {
            engine = engine.with_endpoint(endpoint);
        }

        PromptFn::wrap(
            engine,
            PromptSerializer::new(Cl100kEncoder::shared()),
            self.model,
            self.temperature,
            self.max_prompt_tokens,
            spec,
        )
    }
}
