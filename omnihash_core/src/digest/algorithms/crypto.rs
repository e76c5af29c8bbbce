//! Adapter for RustCrypto digest implementations
//!
//! All the fixed-output digests (MD4 through SHA-3, Tiger, RIPEMD-160)
//! share the `digest::Digest` interface, so one generic adapter maps them
//! onto the registry traits.

use crate::Result;
use crate::digest::{DigestValue, HashAlgorithm, OutputKind};
use crate::digest::{DigestAlgorithm, StreamingHasher};
use digest::Digest;
use std::marker::PhantomData;

/// Registry entry backed by a `digest::Digest` implementation
pub struct CryptoAlgorithm<D> {
    algorithm: HashAlgorithm,
    display_name: &'static str,
    _hasher: PhantomData<fn() -> D>,
}

impl<D> CryptoAlgorithm<D> {
    pub fn new(algorithm: HashAlgorithm, display_name: &'static str) -> Self {
        Self {
            algorithm,
            display_name,
            _hasher: PhantomData,
        }
    }
}

impl<D: Digest + Send + 'static> DigestAlgorithm for CryptoAlgorithm<D> {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::HexDigest
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(CryptoHasher { inner: D::new() })
    }
}

struct CryptoHasher<D: Digest> {
    inner: D,
}

impl<D: Digest + Send> StreamingHasher for CryptoHasher<D> {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self: Box<Self>) -> Result<DigestValue> {
        Ok(DigestValue::Bytes(self.inner.finalize().to_vec()))
    }
}
