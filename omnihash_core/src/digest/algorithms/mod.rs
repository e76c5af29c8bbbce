//! Concrete algorithm implementations backing the registry

mod base64;
mod crc;
mod crypto;
mod haval;

use crate::digest::{DigestAlgorithm, HashAlgorithm};
use std::sync::Arc;

use self::base64::Base64Algorithm;
use self::crc::{Crc16Algorithm, Crc32Algorithm, Crc64Algorithm};
use self::crypto::CryptoAlgorithm;
use self::haval::HavalAlgorithm;

/// Build every supported algorithm, in registry order
pub(crate) fn build_all() -> Vec<Arc<dyn DigestAlgorithm>> {
    vec![
        Arc::new(Crc16Algorithm),
        Arc::new(Crc32Algorithm),
        Arc::new(Crc64Algorithm),
        Arc::new(CryptoAlgorithm::<md4::Md4>::new(HashAlgorithm::Md4, "MD4")),
        Arc::new(CryptoAlgorithm::<md5::Md5>::new(HashAlgorithm::Md5, "MD5")),
        Arc::new(CryptoAlgorithm::<sha1::Sha1>::new(
            HashAlgorithm::Sha1,
            "SHA-1",
        )),
        Arc::new(CryptoAlgorithm::<sha2::Sha224>::new(
            HashAlgorithm::Sha224,
            "SHA-224",
        )),
        Arc::new(CryptoAlgorithm::<sha2::Sha256>::new(
            HashAlgorithm::Sha256,
            "SHA-256",
        )),
        Arc::new(CryptoAlgorithm::<sha2::Sha384>::new(
            HashAlgorithm::Sha384,
            "SHA-384",
        )),
        Arc::new(CryptoAlgorithm::<sha2::Sha512>::new(
            HashAlgorithm::Sha512,
            "SHA-512",
        )),
        Arc::new(CryptoAlgorithm::<sha3::Sha3_224>::new(
            HashAlgorithm::Sha3_224,
            "SHA3-224",
        )),
        Arc::new(CryptoAlgorithm::<sha3::Sha3_256>::new(
            HashAlgorithm::Sha3_256,
            "SHA3-256",
        )),
        Arc::new(CryptoAlgorithm::<sha3::Sha3_384>::new(
            HashAlgorithm::Sha3_384,
            "SHA3-384",
        )),
        Arc::new(CryptoAlgorithm::<sha3::Sha3_512>::new(
            HashAlgorithm::Sha3_512,
            "SHA3-512",
        )),
        Arc::new(CryptoAlgorithm::<tiger::Tiger>::new(
            HashAlgorithm::Tiger,
            "Tiger",
        )),
        Arc::new(CryptoAlgorithm::<ripemd::Ripemd160>::new(
            HashAlgorithm::Ripemd160,
            "RIPEMD-160",
        )),
        Arc::new(HavalAlgorithm::new(HashAlgorithm::Haval128, "HAVAL-128", 128)),
        Arc::new(HavalAlgorithm::new(HashAlgorithm::Haval160, "HAVAL-160", 160)),
        Arc::new(HavalAlgorithm::new(HashAlgorithm::Haval192, "HAVAL-192", 192)),
        Arc::new(HavalAlgorithm::new(HashAlgorithm::Haval224, "HAVAL-224", 224)),
        Arc::new(HavalAlgorithm::new(HashAlgorithm::Haval256, "HAVAL-256", 256)),
        Arc::new(Base64Algorithm),
    ]
}
