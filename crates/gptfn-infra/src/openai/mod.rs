//! Chat-completions engine for the OpenAI endpoint.
//!
//! `client` holds the reqwest-backed [`client::OpenAiEngine`]; `sse`
//! is the incremental parser for the streaming response body; `types`
//! are the wire shapes.

pub mod client;
mod sse;
pub mod types;
