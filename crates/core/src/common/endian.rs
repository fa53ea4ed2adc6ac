//! Byte-order handling for raw instruction words.
//!
//! Raw words are held exactly as they sit in memory. A word is corrected into host
//! order by byte-swapping it when the source order differs from the host's, and left
//! untouched otherwise.

use serde::Deserialize;

use super::error::{Error, Result};

/// Byte order of a word stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Returns the byte order of the host the crate was compiled for.
    #[inline]
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns the opposite byte order.
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    /// Returns `true` if words in this order must be byte-swapped to reach host order.
    #[inline]
    pub fn needs_swap(self) -> bool {
        self != Self::host()
    }
}

impl std::str::FromStr for Endianness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            other => Err(Error::Config(format!("unknown endianness `{other}`"))),
        }
    }
}

/// Converts a raw in-memory word from `source` order into host order.
///
/// # Arguments
///
/// * `word` - The word exactly as read from memory.
/// * `source` - The byte order the word was written in.
#[inline(always)]
pub fn fix_word(word: u32, source: Endianness) -> u32 {
    if source.needs_swap() {
        word.swap_bytes()
    } else {
        word
    }
}

/// Reinterprets a byte buffer as raw in-memory words without any byte-order correction.
///
/// Returns [`Error::UnalignedLength`] if the buffer is not a whole number of words.
pub fn raw_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::UnalignedLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
