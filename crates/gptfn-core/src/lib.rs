//! Business logic for gptfn.
//!
//! This crate defines the ports (the [`engine::ChatEngine`] and
//! [`encoder::TokenEncoder`] traits) that the infrastructure layer
//! implements, plus everything that is pure computation: rendering a
//! message list into a model's chat markup, counting prompt tokens,
//! enforcing the token budget, and compiling a specification string
//! into a model-backed callable. It depends only on `gptfn-types` --
//! never on an HTTP or tokenizer crate.

pub mod budget;
pub mod encoder;
pub mod engine;
pub mod prompt;
pub mod serializer;
pub mod wrap;
