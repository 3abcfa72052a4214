//! The function compiler: specification + answer shape -> callable.
//!
//! The answer shape is a compile-time tagged choice ([`Text`],
//! [`TextStream`], [`Boolean`]) rather than runtime reflection: each
//! marker type selects the engine mode, the instruction suffix, the
//! stop sequences, and how the engine's output is interpreted. An
//! unsupported shape is unrepresentable, and the specification is
//! validated once, at wrap time.

use std::marker::PhantomData;

use tracing::debug;

use gptfn_types::chat::{ChatModel, CompletionRequest, Message, Role};
use gptfn_types::error::Error;

use crate::budget::TokenBudget;
use crate::engine::{ChatEngine, CompletionStream};
use crate::prompt::build_instructions;
use crate::serializer::PromptSerializer;

/// The three supported answer shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Text,
    Stream,
    Boolean,
}

/// Declared answer shape of a wrapped function.
///
/// Binds the engine mode and the response interpretation for one of the
/// [`ReturnKind`]s. Implemented by the marker types in this module;
/// downstream code picks one as the type parameter of [`PromptFn`].
pub trait ReturnType {
    /// What a call to the wrapped function produces.
    type Output;

    const KIND: ReturnKind;

    /// Stop sequences this shape sends with the request.
    fn stop() -> Option<Vec<String>> {
        None
    }

    /// Invoke the right engine mode and interpret its result.
    fn dispatch<E: ChatEngine>(
        engine: &E,
        request: CompletionRequest,
    ) -> impl std::future::Future<Output = Result<Self::Output, Error>> + Send;
}

/// Full answer as a single string, passed through unchanged.
#[derive(Debug)]
pub struct Text;

/// Lazy fragment stream; restartable per call, not per stream.
#[derive(Debug)]
pub struct TextStream;

/// Yes/no answer. The model is asked to reply `true` or `false` and the
/// reply is true iff it contains `"true"` after lowercasing.
#[derive(Debug)]
pub struct Boolean;

impl ReturnType for Text {
    type Output = String;

    const KIND: ReturnKind = ReturnKind::Text;

    async fn dispatch<E: ChatEngine>(
        engine: &E,
        request: CompletionRequest,
    ) -> Result<String, Error> {
        engine.answer(request).await
    }
}

impl ReturnType for TextStream {
    type Output = CompletionStream;

    const KIND: ReturnKind = ReturnKind::Stream;

    async fn dispatch<E: ChatEngine>(
        engine: &E,
        request: CompletionRequest,
    ) -> Result<CompletionStream, Error> {
        Ok(engine.stream(request))
    }
}

impl ReturnType for Boolean {
    type Output = bool;

    const KIND: ReturnKind = ReturnKind::Boolean;

    fn stop() -> Option<Vec<String>> {
        Some(vec!["true".to_string(), "false".to_string()])
    }

    async fn dispatch<E: ChatEngine>(
        engine: &E,
        request: CompletionRequest,
    ) -> Result<bool, Error> {
        let text = engine.answer(request).await?;
        Ok(text.to_lowercase().contains("true"))
    }
}

/// A specification compiled into a model-backed callable.
///
/// Owns its instruction prompt for the callable's lifetime. Every
/// invocation builds a fresh two-message list (instruction, user),
/// enforces the token budget, and dispatches to the engine mode the
/// answer shape `R` selects.
pub struct PromptFn<R: ReturnType, E: ChatEngine> {
    engine: E,
    serializer: PromptSerializer,
    model: ChatModel,
    temperature: f64,
    budget: TokenBudget,
    instructions: String,
    _output: PhantomData<fn() -> R>,
}

impl<R: ReturnType, E: ChatEngine> PromptFn<R, E> {
    /// Compile a specification into a callable.
    ///
    /// Validates the specification once, here -- a blank spec fails with
    /// [`Error::MissingSpecification`] before any call is made. The
    /// budget is the caller's ceiling when given, otherwise 7/8 of the
    /// model's context window.
    pub fn wrap(
        engine: E,
        serializer: PromptSerializer,
        model: ChatModel,
        temperature: f64,
        max_prompt_tokens: Option<usize>,
        spec: &str,
    ) -> Result<Self, Error> {
        let instructions = build_instructions(spec, R::KIND)?;
        let budget = match max_prompt_tokens {
            Some(limit) => TokenBudget::explicit(limit),
            None => TokenBudget::for_model(model),
        };
        debug!(model = %model, kind = ?R::KIND, budget = budget.limit(), "compiled specification");

        Ok(Self {
            engine,
            serializer,
            model,
            temperature,
            budget,
            instructions,
            _output: PhantomData,
        })
    }

    /// The instruction prompt this callable sends with every message.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Invoke the wrapped function with one user message.
    pub async fn call(&self, message: &str) -> Result<R::Output, Error> {
        let messages = vec![
            Message::new(self.model.instruction_role(), self.instructions.clone()),
            Message::new(Role::User, message),
        ];

        let count = self.serializer.token_count(&messages, self.model);
        self.budget.check(count)?;
        debug!(tokens = count, "dispatching chat completion");

        let request = CompletionRequest {
            model: self.model,
            messages,
            temperature: self.temperature,
            stop: R::stop(),
        };
        R::dispatch(&self.engine, request).await
    }
}
