//! Core traits for digest algorithm implementations

use crate::Result;
use crate::digest::{AlgorithmDescriptor, DigestValue, HashAlgorithm, OutputKind};

/// A digest algorithm known to the registry
///
/// Implementations are stateless factories; per-run state lives in the
/// [`StreamingHasher`] they create. This keeps the registry shareable
/// across threads and computation runs.
pub trait DigestAlgorithm: Send + Sync {
    /// Which registry entry this implementation backs
    fn algorithm(&self) -> HashAlgorithm;

    /// Human-readable name for display
    fn display_name(&self) -> &'static str;

    /// How the raw output renders
    fn output_kind(&self) -> OutputKind;

    /// Create a fresh hasher for one computation run
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Descriptor for this entry
    fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            algorithm: self.algorithm(),
            display_name: self.display_name(),
            output_kind: self.output_kind(),
        }
    }

    /// Compute the value over a complete in-memory buffer
    fn compute_bytes(&self, data: &[u8]) -> Result<DigestValue> {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Incremental hasher state for a single computation run
///
/// `update` may be called any number of times (including zero) before
/// `finalize`; the result must equal hashing the concatenation of all
/// chunks in one call.
pub trait StreamingHasher: Send {
    /// Feed the next chunk of input
    fn update(&mut self, data: &[u8]);

    /// Consume the state and produce the final value
    fn finalize(self: Box<Self>) -> Result<DigestValue>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::AlgorithmRegistry;

    #[test]
    fn test_chunked_update_matches_single_update() {
        let data = b"the quick brown fox jumps over the lazy dog";
        for entry in AlgorithmRegistry::global().entries() {
            let whole = entry.compute_bytes(data).unwrap();

            let mut hasher = entry.create_hasher();
            for chunk in data.chunks(7) {
                hasher.update(chunk);
            }
            let chunked = hasher.finalize().unwrap();

            assert_eq!(whole, chunked, "mismatch for {}", entry.algorithm());
        }
    }

    #[test]
    fn test_finalize_without_update_matches_empty_input() {
        for entry in AlgorithmRegistry::global().entries() {
            let empty = entry.compute_bytes(&[]).unwrap();
            let untouched = entry.create_hasher().finalize().unwrap();
            assert_eq!(empty, untouched, "mismatch for {}", entry.algorithm());
        }
    }
}
