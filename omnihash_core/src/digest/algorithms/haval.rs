//! HAVAL hash function, fixed at 5 passes
//!
//! HAVAL (Zheng, Pieprzyk, Seberry 1992) processes 1024-bit blocks over
//! eight 32-bit chaining words and folds the final state down to the
//! requested output width (128 to 256 bits in 32-bit steps). No maintained
//! crate implements it, so it is implemented here. The pass count is fixed
//! at 5 for every output width.

use crate::Result;
use crate::digest::{DigestAlgorithm, StreamingHasher};
use crate::digest::{DigestValue, HashAlgorithm, OutputKind};

const BLOCK_LEN: usize = 128;
const PASSES: u64 = 5;

const IV: [u32; 8] = [
    0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, 0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89,
];

/// Word processing orders for passes 2-5 (pass 1 is sequential)
const ORD2: [usize; 32] = [
    5, 14, 26, 18, 11, 28, 7, 16, 0, 23, 20, 22, 1, 10, 4, 8, 30, 3, 21, 9, 17, 24, 29, 6, 19, 12,
    15, 13, 2, 25, 31, 27,
];
const ORD3: [usize; 32] = [
    19, 9, 4, 20, 28, 17, 8, 22, 29, 14, 25, 12, 24, 30, 16, 26, 31, 15, 7, 3, 1, 0, 18, 27, 13,
    6, 21, 10, 23, 11, 5, 2,
];
const ORD4: [usize; 32] = [
    24, 4, 0, 14, 2, 7, 28, 23, 26, 6, 30, 20, 18, 25, 19, 3, 22, 11, 31, 21, 8, 27, 12, 9, 1, 29,
    5, 15, 17, 10, 16, 13,
];
const ORD5: [usize; 32] = [
    27, 3, 21, 26, 17, 11, 20, 29, 19, 0, 12, 7, 13, 8, 31, 10, 5, 9, 14, 30, 18, 6, 28, 24, 2,
    23, 16, 22, 4, 1, 25, 15,
];

/// Additive constants for passes 2-5 (fractional digits of pi)
const K2: [u32; 32] = [
    0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C, 0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917,
    0x9216D5D9, 0x8979FB1B, 0xD1310BA6, 0x98DFB5AC, 0x2FFD72DB, 0xD01ADFB7, 0xB8E1AFED, 0x6A267E96,
    0xBA7C9045, 0xF12C7F99, 0x24A19947, 0xB3916CF7, 0x0801F2E2, 0x858EFC16, 0x636920D8, 0x71574E69,
    0xA458FEA3, 0xF4933D7E, 0x0D95748F, 0x728EB658, 0x718BCD58, 0x82154AEE, 0x7B54A41D, 0xC25A59B5,
];
const K3: [u32; 32] = [
    0x9C30D539, 0x2AF26013, 0xC5D1B023, 0x286085F0, 0xCA417918, 0xB8DB38EF, 0x8E79DCB0, 0x603A180E,
    0x6C9E0E8B, 0xB01E8A3E, 0xD71577C1, 0xBD314B27, 0x78AF2FDA, 0x55605C60, 0xE65525F3, 0xAA55AB94,
    0x57489862, 0x63E81440, 0x55CA396A, 0x2AAB10B6, 0xB4CC5C34, 0x1141E8CE, 0xA15486AF, 0x7C72E993,
    0xB3EE1411, 0x636FBC2A, 0x2BA9C55D, 0x741831F6, 0xCE5C3E16, 0x9B87931E, 0xAFD6BA33, 0x6C24CF5C,
];
const K4: [u32; 32] = [
    0x7A325381, 0x28958677, 0x3B8F4898, 0x6B4BB9AF, 0xC4BFE81B, 0x66282193, 0x61D809CC, 0xFB21A991,
    0x487CAC60, 0x5DEC8032, 0xEF845D5D, 0xE98575B1, 0xDC262302, 0xEB651B88, 0x23893E81, 0xD396ACC5,
    0x0F6D6FF3, 0x83F44239, 0x2E0B4482, 0xA4842004, 0x69C8F04A, 0x9E1F9B5E, 0x21C66842, 0xF6E96C9A,
    0x670C9C61, 0xABD388F0, 0x6A51A0D2, 0xD8542F68, 0x960FA728, 0xAB5133A3, 0x6EEF0B6C, 0x137A3BE4,
];
const K5: [u32; 32] = [
    0xBA3BF050, 0x7EFB2A98, 0xA1F1651D, 0x39AF0176, 0x66CA593E, 0x82430E88, 0x8CEE8619, 0x456F9FB4,
    0x7D84A5C3, 0x3B8B5EBE, 0xE06F75D8, 0x85C12073, 0x401A449F, 0x56C16AA6, 0x4ED3AA62, 0x363F7706,
    0x1BFEDF72, 0x429B023D, 0x37D0D724, 0xD00A1248, 0xDB0FEAD3, 0x49F1C09B, 0x075372C9, 0x80991B7B,
    0x25D479D8, 0xF6E8DEF7, 0xE3FE501A, 0xB6794C3B, 0x976CE0BD, 0x04C006BA, 0xC1A94FB6, 0x409F60C4,
];

/// Boolean functions f1-f5 with argument order (x6, x5, x4, x3, x2, x1, x0)
fn f1(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    x1 & (x0 ^ x4) ^ x2 & x5 ^ x3 & x6 ^ x0
}

fn f2(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    x2 & (x1 & !x3 ^ x4 & x5 ^ x6 ^ x0) ^ x4 & (x1 ^ x5) ^ x3 & x5 ^ x0
}

fn f3(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    x3 & (x1 & x2 ^ x6 ^ x0) ^ x1 & x4 ^ x2 & x5 ^ x0
}

fn f4(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    x4 & (x5 & !x2 ^ x3 & !x6 ^ x1 ^ x6 ^ x0) ^ x3 & (x1 & x2 ^ x5 ^ x6) ^ x2 & x6 ^ x0
}

fn f5(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    x0 & (x1 & x2 & x3 ^ !x5) ^ x1 & x4 ^ x2 & x5 ^ x3 & x6
}

/// Composite functions Fphi for the 5-pass variant: f_p over a fixed
/// permutation of the register arguments
fn fphi1(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    f1(x3, x4, x1, x0, x5, x2, x6)
}

fn fphi2(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    f2(x6, x2, x1, x0, x3, x4, x5)
}

fn fphi3(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    f3(x2, x6, x0, x4, x3, x1, x5)
}

fn fphi4(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    f4(x1, x5, x3, x2, x0, x4, x6)
}

fn fphi5(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
    f5(x2, x5, x0, x6, x4, x3, x1)
}

/// HAVAL registry entry for one output width
pub struct HavalAlgorithm {
    algorithm: HashAlgorithm,
    display_name: &'static str,
    output_bits: u32,
}

impl HavalAlgorithm {
    pub fn new(algorithm: HashAlgorithm, display_name: &'static str, output_bits: u32) -> Self {
        debug_assert!(matches!(output_bits, 128 | 160 | 192 | 224 | 256));
        Self {
            algorithm,
            display_name,
            output_bits,
        }
    }
}

impl DigestAlgorithm for HavalAlgorithm {
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
        Box::new(HavalHasher {
            state: IV,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            total_bytes: 0,
            output_bits: self.output_bits,
        })
    }
}

struct HavalHasher {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    total_bytes: u64,
    output_bits: u32,
}

impl HavalHasher {
    fn compress(&mut self) {
        let mut w = [0u32; 32];
        for (word, chunk) in w.iter_mut().zip(self.buffer.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let mut t = self.state;
        haval_pass(&mut t, &w, None, None, fphi1);
        haval_pass(&mut t, &w, Some(&ORD2), Some(&K2), fphi2);
        haval_pass(&mut t, &w, Some(&ORD3), Some(&K3), fphi3);
        haval_pass(&mut t, &w, Some(&ORD4), Some(&K4), fphi4);
        haval_pass(&mut t, &w, Some(&ORD5), Some(&K5), fphi5);

        for (fold, step) in self.state.iter_mut().zip(t) {
            *fold = fold.wrapping_add(step);
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        let mut remaining = data;
        while !remaining.is_empty() {
            let space = BLOCK_LEN - self.buffered;
            let take = space.min(remaining.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&remaining[..take]);
            self.buffered += take;
            remaining = &remaining[take..];

            if self.buffered == BLOCK_LEN {
                self.compress();
                self.buffered = 0;
            }
        }
    }

    /// Fold the 256-bit state down to the output width
    fn tailor(&self) -> Vec<u32> {
        let s = self.state;
        let (t7, t6, t5, t4) = (s[7], s[6], s[5], s[4]);

        match self.output_bits {
            128 => vec![
                s[0].wrapping_add(
                    ((t7 & 0x0000_00FF)
                        | (t6 & 0xFF00_0000)
                        | (t5 & 0x00FF_0000)
                        | (t4 & 0x0000_FF00))
                        .rotate_right(8),
                ),
                s[1].wrapping_add(
                    ((t7 & 0x0000_FF00)
                        | (t6 & 0x0000_00FF)
                        | (t5 & 0xFF00_0000)
                        | (t4 & 0x00FF_0000))
                        .rotate_right(16),
                ),
                s[2].wrapping_add(
                    ((t7 & 0x00FF_0000)
                        | (t6 & 0x0000_FF00)
                        | (t5 & 0x0000_00FF)
                        | (t4 & 0xFF00_0000))
                        .rotate_right(24),
                ),
                s[3].wrapping_add(
                    (t7 & 0xFF00_0000)
                        | (t6 & 0x00FF_0000)
                        | (t5 & 0x0000_FF00)
                        | (t4 & 0x0000_00FF),
                ),
            ],
            160 => vec![
                s[0].wrapping_add(
                    ((t7 & 0x3F) | (t6 & (0x7F << 25)) | (t5 & (0x3F << 19))).rotate_right(19),
                ),
                s[1].wrapping_add(
                    ((t7 & (0x3F << 6)) | (t6 & 0x3F) | (t5 & (0x7F << 25))).rotate_right(25),
                ),
                s[2].wrapping_add((t7 & (0x7F << 12)) | (t6 & (0x3F << 6)) | (t5 & 0x3F)),
                s[3].wrapping_add(
                    ((t7 & (0x3F << 19)) | (t6 & (0x7F << 12)) | (t5 & (0x3F << 6))) >> 6,
                ),
                s[4].wrapping_add(
                    ((t7 & (0x7F << 25)) | (t6 & (0x3F << 19)) | (t5 & (0x7F << 12))) >> 12,
                ),
            ],
            192 => vec![
                s[0].wrapping_add(((t7 & 0x1F) | (t6 & (0x3F << 26))).rotate_right(26)),
                s[1].wrapping_add((t7 & (0x1F << 5)) | (t6 & 0x1F)),
                s[2].wrapping_add(((t7 & (0x3F << 10)) | (t6 & (0x1F << 5))) >> 5),
                s[3].wrapping_add(((t7 & (0x1F << 16)) | (t6 & (0x3F << 10))) >> 10),
                s[4].wrapping_add(((t7 & (0x1F << 21)) | (t6 & (0x1F << 16))) >> 16),
                s[5].wrapping_add(((t7 & (0x3F << 26)) | (t6 & (0x1F << 21))) >> 21),
            ],
            224 => vec![
                s[0].wrapping_add((t7 >> 27) & 0x1F),
                s[1].wrapping_add((t7 >> 22) & 0x1F),
                s[2].wrapping_add((t7 >> 18) & 0x0F),
                s[3].wrapping_add((t7 >> 13) & 0x1F),
                s[4].wrapping_add((t7 >> 9) & 0x0F),
                s[5].wrapping_add((t7 >> 4) & 0x1F),
                s[6].wrapping_add(t7 & 0x0F),
            ],
            _ => s.to_vec(),
        }
    }
}

/// One 32-step pass over the working registers
///
/// Step `i` updates register `(7 - i) mod 8` from the other seven. Pass 1
/// reads message words sequentially and adds no constant.
fn haval_pass(
    t: &mut [u32; 8],
    w: &[u32; 32],
    order: Option<&[usize; 32]>,
    k: Option<&[u32; 32]>,
    fphi: fn(u32, u32, u32, u32, u32, u32, u32) -> u32,
) {
    for i in 0..32 {
        let idx7 = (15 - (i % 8)) % 8;
        let arg = |j: usize| t[(idx7 + 8 - j) % 8];
        let temp = fphi(arg(1), arg(2), arg(3), arg(4), arg(5), arg(6), arg(7));

        let word = match order {
            Some(order) => w[order[i]],
            None => w[i],
        };
        let mut value = temp
            .rotate_right(7)
            .wrapping_add(t[idx7].rotate_right(11))
            .wrapping_add(word);
        if let Some(k) = k {
            value = value.wrapping_add(k[i]);
        }
        t[idx7] = value;
    }
}

impl StreamingHasher for HavalHasher {
    fn update(&mut self, data: &[u8]) {
        self.total_bytes += data.len() as u64;
        self.absorb(data);
    }

    fn finalize(mut self: Box<Self>) -> Result<DigestValue> {
        let total_bits = self.total_bytes.wrapping_mul(8);

        // Pad with 0x01 then zeros until 10 bytes short of a block boundary,
        // then append the version/pass/width field and the 64-bit length.
        let mut tail = vec![0x01u8];
        let pad_zeros = (118 + 2 * BLOCK_LEN - (self.buffered + 1)) % BLOCK_LEN;
        tail.resize(1 + pad_zeros, 0);
        tail.push((((self.output_bits as u8) & 0x3) << 6) | ((PASSES as u8) << 3) | 1);
        tail.push(((self.output_bits >> 2) & 0xFF) as u8);
        tail.extend_from_slice(&total_bits.to_le_bytes());
        self.absorb(&tail);
        debug_assert_eq!(self.buffered, 0);

        let words = self.tailor();
        let mut out = Vec::with_capacity(words.len() * 4);
        for word in words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        Ok(DigestValue::Bytes(out))
    }
}
