//! Core library for omnihash
//!
//! Computes 22 hash, checksum, and encoding outputs over a single input in
//! one pass. Two execution paths share the same algorithm registry: a
//! synchronous path for in-memory buffers and a cancellable streaming path
//! for files, driven by a background task that reports progress, results,
//! and a terminal state over an event channel.
//!
//! # Example
//!
//! ```
//! use omnihash_core::{DigestEngine, HashAlgorithm};
//!
//! let engine = DigestEngine::new();
//! let results = engine.compute_all(b"abc", false)?;
//! assert_eq!(
//!     results[HashAlgorithm::Md5.index()].output,
//!     "900150983cd24fb0d6963f7d28e17f72"
//! );
//! # Ok::<(), omnihash_core::Error>(())
//! ```

pub mod digest;
pub mod engine;
pub mod error;

pub use digest::{
    AlgorithmDescriptor, AlgorithmRegistry, DigestAlgorithm, DigestResult, DigestValue,
    HashAlgorithm, OutputKind, StreamingHasher,
};
pub use engine::{
    CancelToken, DEFAULT_CHUNK_SIZE, DigestEngine, DigestEvent, EngineConfig, InputSource,
};
pub use error::{Error, Result};
