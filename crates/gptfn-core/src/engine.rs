//! ChatEngine trait definition.
//!
//! The core abstraction over the chat-completions endpoint. Uses a
//! native async fn (RPITIT) for `answer` and a boxed stream for
//! `stream`, so engines stay object-friendly where it matters.
//! The concrete implementation lives in gptfn-infra.

use std::pin::Pin;

use futures_util::Stream;

use gptfn_types::chat::CompletionRequest;
use gptfn_types::error::Error;

/// A lazy, pull-based sequence of answer fragments.
///
/// Each item is only fetched from the underlying connection when the
/// consumer asks for it. The stream owns the connection: it is released
/// when the sequence is exhausted and when the consumer drops the
/// stream early, on every exit path.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<String, Error>> + Send + 'static>>;

/// One round trip against the chat-completions endpoint.
///
/// Both operations open one outbound connection per call. There is no
/// retry, no timeout, and no conversation state: transport failures
/// propagate immediately to the caller.
pub trait ChatEngine: Send + Sync {
    /// Single-shot completion: send the message list, return the full
    /// generated answer.
    fn answer(
        &self,
        request: CompletionRequest,
    ) -> impl std::future::Future<Output = Result<String, Error>> + Send;

    /// Incremental completion: send the message list with streaming
    /// enabled, return the fragment sequence. The sequence is finite
    /// and not restartable; a new call opens a new connection.
    fn stream(&self, request: CompletionRequest) -> CompletionStream;
}
