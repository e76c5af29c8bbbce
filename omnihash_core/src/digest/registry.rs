//! Ordered registry of digest algorithm implementations

use crate::digest::algorithms;
use crate::digest::{AlgorithmDescriptor, DigestAlgorithm, HashAlgorithm};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static GLOBAL_REGISTRY: OnceCell<AlgorithmRegistry> = OnceCell::new();

/// Immutable, ordered collection of every supported algorithm
///
/// Entry positions match [`HashAlgorithm::ALL`], so the index of a result
/// is stable across runs and identifies the same algorithm forever.
pub struct AlgorithmRegistry {
    entries: Vec<Arc<dyn DigestAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Create a registry with all supported algorithms in registry order
    pub fn new() -> Self {
        Self {
            entries: algorithms::build_all(),
        }
    }

    /// Get the process-wide shared registry
    pub fn global() -> &'static AlgorithmRegistry {
        GLOBAL_REGISTRY.get_or_init(AlgorithmRegistry::new)
    }

    /// All entries in registry order
    pub fn entries(&self) -> &[Arc<dyn DigestAlgorithm>] {
        &self.entries
    }

    /// Look up the implementation backing an algorithm
    pub fn get(&self, algorithm: HashAlgorithm) -> &Arc<dyn DigestAlgorithm> {
        // Construction puts every algorithm at its own index.
        &self.entries[algorithm.index()]
    }

    /// Look up an entry by registry index
    pub fn by_index(&self, index: usize) -> Option<&Arc<dyn DigestAlgorithm>> {
        self.entries.get(index)
    }

    /// Descriptors for every entry, in registry order
    pub fn descriptors(&self) -> Vec<AlgorithmDescriptor> {
        self.entries.iter().map(|e| e.descriptor()).collect()
    }

    /// Number of registered algorithms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::OutputKind;

    #[test]
    fn test_registry_has_all_algorithms_in_order() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(registry.len(), HashAlgorithm::ALL.len());

        for (index, expected) in HashAlgorithm::ALL.iter().enumerate() {
            let entry = registry.by_index(index).unwrap();
            assert_eq!(entry.algorithm(), *expected);
            assert_eq!(registry.get(*expected).algorithm(), *expected);
        }
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = AlgorithmRegistry::global();
        let b = AlgorithmRegistry::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_output_kinds() {
        let registry = AlgorithmRegistry::global();

        for entry in registry.entries() {
            let expected = match entry.algorithm() {
                HashAlgorithm::Crc16 | HashAlgorithm::Crc32 | HashAlgorithm::Crc64 => {
                    OutputKind::NumericChecksum
                }
                HashAlgorithm::Base64 => OutputKind::TextEncoding,
                _ => OutputKind::HexDigest,
            };
            assert_eq!(entry.output_kind(), expected);
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        let registry = AlgorithmRegistry::global();
        let mut names: Vec<&str> = registry.entries().iter().map(|e| e.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }
}
