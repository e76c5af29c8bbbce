//! CRC checksum implementations
//!
//! CRC-16 uses the X-25 parameter set (ISO 3309: polynomial 0x1021
//! reflected, init and xorout 0xFFFF). CRC-64 uses the XZ parameter set.
//! Results are checksums, not digests, so they render as natural-width
//! hex without leading zeros.

use crate::Result;
use crate::digest::{DigestAlgorithm, StreamingHasher};
use crate::digest::{DigestValue, HashAlgorithm, OutputKind};
use crc::Crc;

static CRC16: Crc<u16> = Crc::<u16>::new(&crc::CRC_16_IBM_SDLC);
static CRC64: Crc<u64> = Crc::<u64>::new(&crc::CRC_64_XZ);

/// CRC-16/X-25
pub struct Crc16Algorithm;

impl DigestAlgorithm for Crc16Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Crc16
    }

    fn display_name(&self) -> &'static str {
        "CRC16"
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::NumericChecksum
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Crc16Hasher {
            digest: CRC16.digest(),
        })
    }
}

struct Crc16Hasher {
    digest: crc::Digest<'static, u16>,
}

impl StreamingHasher for Crc16Hasher {
    fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    fn finalize(self: Box<Self>) -> Result<DigestValue> {
        Ok(DigestValue::Checksum(u64::from(self.digest.finalize())))
    }
}

/// CRC-32/ISO-HDLC
pub struct Crc32Algorithm;

impl DigestAlgorithm for Crc32Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Crc32
    }

    fn display_name(&self) -> &'static str {
        "CRC32"
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::NumericChecksum
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Crc32Hasher {
            hasher: crc32fast::Hasher::new(),
        })
    }
}

struct Crc32Hasher {
    hasher: crc32fast::Hasher,
}

impl StreamingHasher for Crc32Hasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Result<DigestValue> {
        Ok(DigestValue::Checksum(u64::from(self.hasher.finalize())))
    }
}

/// CRC-64/XZ
pub struct Crc64Algorithm;

impl DigestAlgorithm for Crc64Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Crc64
    }

    fn display_name(&self) -> &'static str {
        "CRC64"
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::NumericChecksum
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Crc64Hasher {
            digest: CRC64.digest(),
        })
    }
}

struct Crc64Hasher {
    digest: crc::Digest<'static, u64>,
}

impl StreamingHasher for Crc64Hasher {
    fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    fn finalize(self: Box<Self>) -> Result<DigestValue> {
        Ok(DigestValue::Checksum(self.digest.finalize()))
    }
}
