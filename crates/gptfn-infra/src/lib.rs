//! Infrastructure layer for gptfn.
//!
//! Implements the ports defined in `gptfn-core`: the reqwest-backed
//! chat-completions engine (with a hand-rolled incremental parser for
//! the event stream), the cl100k byte-pair encoder singleton, and
//! environment credential loading. [`builder::PromptFnBuilder`] is the
//! consumer-facing entry point that wires these together.

pub mod builder;
pub mod credentials;
pub mod encoder;
pub mod openai;
