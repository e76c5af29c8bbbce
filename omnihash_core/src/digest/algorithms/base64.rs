//! Base64 text encoding as a registry entry
//!
//! Encodes the input with the URL-safe alphabet and no padding. Encoding
//! proceeds incrementally over complete 3-byte groups so arbitrarily large
//! streams never need to be buffered whole; with no padding, the group
//! encodings concatenate to the same string a single-shot encode produces.

use crate::Result;
use crate::digest::{DigestAlgorithm, StreamingHasher};
use crate::digest::{DigestValue, HashAlgorithm, OutputKind};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Base64 (URL-safe, unpadded) encoding
pub struct Base64Algorithm;

impl DigestAlgorithm for Base64Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Base64
    }

    fn display_name(&self) -> &'static str {
        "Base64"
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::TextEncoding
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Base64Hasher {
            encoded: String::new(),
            carry: Vec::with_capacity(3),
        })
    }
}

struct Base64Hasher {
    encoded: String,
    /// Up to 2 trailing bytes waiting for a complete 3-byte group
    carry: Vec<u8>,
}

impl StreamingHasher for Base64Hasher {
    fn update(&mut self, data: &[u8]) {
        self.carry.extend_from_slice(data);
        let complete = self.carry.len() - self.carry.len() % 3;
        if complete > 0 {
            URL_SAFE_NO_PAD.encode_string(&self.carry[..complete], &mut self.encoded);
            self.carry.drain(..complete);
        }
    }

    fn finalize(mut self: Box<Self>) -> Result<DigestValue> {
        if !self.carry.is_empty() {
            URL_SAFE_NO_PAD.encode_string(&self.carry, &mut self.encoded);
        }
        Ok(DigestValue::Text(self.encoded))
    }
}
