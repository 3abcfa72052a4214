//! TokenEncoder trait definition.
//!
//! Port for the pretrained byte-pair encoder. The implementation in
//! gptfn-infra is a process-wide, read-only singleton; this trait keeps
//! the serializer and its tests independent of the vocabulary data.

/// Maps text to its token id sequence.
///
/// Every special token is permitted literally in the input: markers
/// embedded in message content tokenize the same way as protocol
/// markers. This is deliberate -- the caller is trusted.
pub trait TokenEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Vec<u32>;
}
