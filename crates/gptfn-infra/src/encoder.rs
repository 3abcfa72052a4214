//! cl100k byte-pair encoder adapter.
//!
//! Wraps the pretrained cl100k vocabulary shipped with `tiktoken-rs`
//! as a process-wide singleton: built on first use, read-only
//! afterwards, shared by reference with every serializer. Counting is
//! a pure offline operation with no network dependency.
//!
//! Chat markup markers are not registered in the base vocabulary's
//! special-token table (tiktoken-rs does not expose the rank table to
//! extend it), so they are counted as ordinary text. Counts stay
//! deterministic and err slightly high, which is the safe direction
//! for a budget check.

use std::sync::{Arc, LazyLock};

use tiktoken_rs::CoreBPE;

use gptfn_core::encoder::TokenEncoder;

static SHARED: LazyLock<Arc<Cl100kEncoder>> = LazyLock::new(|| {
    let bpe = tiktoken_rs::cl100k_base().expect("embedded cl100k vocabulary failed to load");
    Arc::new(Cl100kEncoder { bpe })
});

/// The shared cl100k encoder.
pub struct Cl100kEncoder {
    bpe: CoreBPE,
}

impl Cl100kEncoder {
    /// Handle to the process-wide encoder instance.
    pub fn shared() -> Arc<Cl100kEncoder> {
        Arc::clone(&SHARED)
    }
}

impl TokenEncoder for Cl100kEncoder {
    fn encode(&self, text: &str) -> Vec<u32> {
        // Special tokens are permitted literally in the input: a marker
        // embedded in user content tokenizes the same as a protocol
        // marker.
        self.bpe.encode_with_special_tokens(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_returns_the_same_instance() {
        assert!(Arc::ptr_eq(&Cl100kEncoder::shared(), &Cl100kEncoder::shared()));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = Cl100kEncoder::shared();
        let text = "<|im_start|>user\nhello world<|im_end|>";
        assert_eq!(encoder.encode(text), encoder.encode(text));
    }

    #[test]
    fn test_reserved_text_encodes_without_panicking() {
        let encoder = Cl100kEncoder::shared();
        assert!(!encoder.encode("<|endoftext|>").is_empty());
    }

    #[test]
    fn test_empty_text_has_zero_tokens() {
        assert!(Cl100kEncoder::shared().encode("").is_empty());
    }
}
