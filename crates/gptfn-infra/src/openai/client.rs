//! OpenAiEngine -- concrete [`ChatEngine`] for the chat-completions
//! endpoint.
//!
//! One outbound POST per call, no timeout, no retry: transport failures
//! propagate to the caller unmodified. The streaming mode reads the
//! response body incrementally and owns the connection for the
//! sequence's lifetime; dropping the sequence drops the response and
//! releases the connection on every exit path.

use futures_util::StreamExt;
use secrecy::ExposeSecret;
use tracing::{debug, trace};

use gptfn_core::engine::{ChatEngine, CompletionStream};
use gptfn_types::chat::CompletionRequest;
use gptfn_types::error::Error;

use super::sse::{EventParser, LineBuffer, SseEvent};
use super::types::{ChatCompletion, ChatCompletionBody, ChatCompletionChunk};
use crate::credentials::Credentials;

/// Default chat-completions endpoint.
pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions engine backed by reqwest.
pub struct OpenAiEngine {
    client: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
}

// OpenAiEngine intentionally does not derive Debug so the credential
// inside can never leak through formatting.

impl OpenAiEngine {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            endpoint: DEFAULT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Engine with credentials from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Override the endpoint URL (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn post(&self, body: &ChatCompletionBody) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.credentials.api_key.expose_secret())
            .json(body);
        if let Some(organization) = &self.credentials.organization {
            request = request.header("OpenAI-Organization", organization);
        }
        request
    }
}

impl ChatEngine for OpenAiEngine {
    async fn answer(&self, request: CompletionRequest) -> Result<String, Error> {
        let body = ChatCompletionBody::from_request(request, false);
        debug!(model = %body.model, "requesting chat completion");

        let response = self.post(&body).send().await?.error_for_status()?;
        let payload = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&payload)?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(Error::MalformedResponse("completion carried no choices"))?;
        if choice.finish_reason.as_deref() == Some("length") {
            return Err(Error::ResponseTruncated);
        }
        Ok(choice.message.content)
    }

    fn stream(&self, request: CompletionRequest) -> CompletionStream {
        let body = ChatCompletionBody::from_request(request, true);
        debug!(model = %body.model, "opening chat completion stream");
        let builder = self.post(&body);

        Box::pin(async_stream::try_stream! {
            let response = builder.send().await?.error_for_status()?;
            let mut bytes = response.bytes_stream();
            let mut lines = LineBuffer::default();
            let mut parser = EventParser::default();

            'body: while let Some(chunk) = bytes.next().await {
                lines.push(&chunk?);
                while let Some(line) = lines.next_line() {
                    match parser.feed_line(&line) {
                        Some(SseEvent::Done) => break 'body,
                        Some(SseEvent::Data(payload)) => {
                            let event: ChatCompletionChunk = serde_json::from_str(&payload)?;
                            // Choice-less chunks and deltas without a
                            // content key are heartbeats; swallow them.
                            let Some(choice) = event.choices.into_iter().next() else {
                                continue;
                            };
                            if let Some(content) = choice.delta.content {
                                trace!(bytes = content.len(), "stream fragment");
                                yield content;
                            }
                        }
                        None => {}
                    }
                }
            }
        })
    }
}
