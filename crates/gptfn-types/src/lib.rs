//! Shared domain types for gptfn.
//!
//! This crate contains the types used across the gptfn workspace:
//! chat messages, the closed model enumeration with its serialization
//! markers, the domain-level completion request, and the error taxonomy.
//!
//! No I/O lives here -- only data shapes.

pub mod chat;
pub mod error;
