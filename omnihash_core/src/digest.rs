//! Digest types and the algorithm registry
//!
//! This module defines the closed set of supported hash/checksum
//! algorithms, their descriptors, and the typed values they produce.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};

mod algorithms;
mod registry;
mod traits;

pub use registry::AlgorithmRegistry;
pub use traits::{DigestAlgorithm, StreamingHasher};

/// Hash and checksum algorithms supported by the engine
///
/// The declaration order is the registry order; it is stable and maps 1:1
/// to the result index reported for every computation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// CRC-16/X-25 checksum (ISO 3309 parameters)
    Crc16,
    /// CRC-32/ISO-HDLC checksum
    Crc32,
    /// CRC-64/XZ checksum
    Crc64,
    /// MD4 digest
    Md4,
    /// MD5 digest
    Md5,
    /// SHA-1 digest
    Sha1,
    /// SHA-224 digest
    Sha224,
    /// SHA-256 digest
    Sha256,
    /// SHA-384 digest
    Sha384,
    /// SHA-512 digest
    Sha512,
    /// SHA3-224 digest
    Sha3_224,
    /// SHA3-256 digest
    Sha3_256,
    /// SHA3-384 digest
    Sha3_384,
    /// SHA3-512 digest
    Sha3_512,
    /// Tiger digest (192-bit)
    Tiger,
    /// RIPEMD-160 digest
    Ripemd160,
    /// HAVAL, 5 passes, 128-bit output
    Haval128,
    /// HAVAL, 5 passes, 160-bit output
    Haval160,
    /// HAVAL, 5 passes, 192-bit output
    Haval192,
    /// HAVAL, 5 passes, 224-bit output
    Haval224,
    /// HAVAL, 5 passes, 256-bit output
    Haval256,
    /// Base64 text encoding (URL-safe alphabet, no padding)
    Base64,
}

impl HashAlgorithm {
    /// Every supported algorithm, in registry order
    pub const ALL: [HashAlgorithm; 22] = [
        HashAlgorithm::Crc16,
        HashAlgorithm::Crc32,
        HashAlgorithm::Crc64,
        HashAlgorithm::Md4,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Tiger,
        HashAlgorithm::Ripemd160,
        HashAlgorithm::Haval128,
        HashAlgorithm::Haval160,
        HashAlgorithm::Haval192,
        HashAlgorithm::Haval224,
        HashAlgorithm::Haval256,
        HashAlgorithm::Base64,
    ];

    /// Position of this algorithm in the registry order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            HashAlgorithm::Crc16 => "crc16",
            HashAlgorithm::Crc32 => "crc32",
            HashAlgorithm::Crc64 => "crc64",
            HashAlgorithm::Md4 => "md4",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_224 => "sha3-224",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Tiger => "tiger",
            HashAlgorithm::Ripemd160 => "ripemd160",
            HashAlgorithm::Haval128 => "haval128",
            HashAlgorithm::Haval160 => "haval160",
            HashAlgorithm::Haval192 => "haval192",
            HashAlgorithm::Haval224 => "haval224",
            HashAlgorithm::Haval256 => "haval256",
            HashAlgorithm::Base64 => "base64",
        };
        write!(f, "{id}")
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        HashAlgorithm::ALL
            .iter()
            .copied()
            .find(|a| a.to_string() == lowered)
            .ok_or_else(|| {
                Error::Validation(ValidationError::invalid_parameter(
                    "algorithm",
                    &format!("unknown algorithm: {s}"),
                ))
            })
    }
}

/// How an algorithm's raw output is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    /// Raw digest bytes, rendered as a hex string (case flag applies)
    HexDigest,
    /// Unsigned checksum value, rendered as natural-width hex (case flag applies)
    NumericChecksum,
    /// Already-textual encoding; the case flag never applies
    TextEncoding,
}

/// Immutable description of one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub algorithm: HashAlgorithm,
    pub display_name: &'static str,
    pub output_kind: OutputKind,
}

/// Typed output of one algorithm over one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestValue {
    /// Fixed-length digest bytes
    Bytes(Vec<u8>),
    /// Unsigned checksum (16/32/64 bits wide, stored zero-extended)
    Checksum(u64),
    /// Textual encoding of the input
    Text(String),
}

impl DigestValue {
    /// Render the value according to its output kind and the display-case flag
    ///
    /// Hex digests render lowercase by default; checksums render as
    /// natural-width hex with no leading zero padding. Text encodings are
    /// returned verbatim regardless of the flag.
    pub fn render(&self, uppercase: bool) -> String {
        match self {
            DigestValue::Bytes(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2);
                for byte in bytes {
                    let piece = if uppercase {
                        format!("{byte:02X}")
                    } else {
                        format!("{byte:02x}")
                    };
                    out.push_str(&piece);
                }
                out
            }
            DigestValue::Checksum(value) => {
                if uppercase {
                    format!("{value:X}")
                } else {
                    format!("{value:x}")
                }
            }
            DigestValue::Text(text) => text.clone(),
        }
    }
}

/// Result of one algorithm within a computation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestResult {
    /// Which algorithm produced this result
    pub algorithm: HashAlgorithm,
    /// Registry index of the algorithm (stable result slot)
    pub index: usize,
    /// Typed raw value
    pub value: DigestValue,
    /// Value rendered with the display-case flag of the run
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_registry_order_matches_indices() {
        for (i, algorithm) in HashAlgorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.index(), i);
        }
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for algorithm in HashAlgorithm::ALL {
            let parsed = HashAlgorithm::from_str(&algorithm.to_string()).unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(
            HashAlgorithm::from_str("SHA3-256").unwrap(),
            HashAlgorithm::Sha3_256
        );
        assert_eq!(
            HashAlgorithm::from_str("Crc64").unwrap(),
            HashAlgorithm::Crc64
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(HashAlgorithm::from_str("md6").is_err());
    }

    #[test]
    fn test_render_hex_digest_casing() {
        let value = DigestValue::Bytes(vec![0xde, 0xad, 0x0b, 0xee]);
        assert_eq!(value.render(false), "dead0bee");
        assert_eq!(value.render(true), "DEAD0BEE");
    }

    #[test]
    fn test_render_checksum_has_no_leading_zeros() {
        assert_eq!(DigestValue::Checksum(0x352441c2).render(false), "352441c2");
        assert_eq!(DigestValue::Checksum(0x0082f7).render(false), "82f7");
        assert_eq!(DigestValue::Checksum(0).render(false), "0");
        assert_eq!(DigestValue::Checksum(0xabc).render(true), "ABC");
    }

    #[test]
    fn test_render_text_ignores_case_flag() {
        let value = DigestValue::Text("YWJj".to_string());
        assert_eq!(value.render(false), "YWJj");
        assert_eq!(value.render(true), "YWJj");
    }

    #[test]
    fn test_digest_result_serialization() {
        let result = DigestResult {
            algorithm: HashAlgorithm::Md5,
            index: HashAlgorithm::Md5.index(),
            value: DigestValue::Bytes(vec![0xde, 0xad]),
            output: "dead".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("Md5"));
        assert!(json.contains("dead"));

        let deserialized: DigestResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.algorithm, HashAlgorithm::Md5);
        assert_eq!(deserialized.output, "dead");
    }
}
