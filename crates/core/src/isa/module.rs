//! SPIR-V module header.
//!
//! The first five words of a module are `magic`, `version`, `generator`, `bound` and
//! `schema`. Detecting the module's byte order is the caller's business; this parser
//! takes the byte order as given and rejects the header if the magic number does not
//! come out right.

use serde::Serialize;

use crate::common::constants::{MAGIC_NUMBER, MODULE_HEADER_WORDS};
use crate::common::endian::{Endianness, fix_word};
use crate::common::error::{Error, Result};
use crate::vendor;

/// The five-word module header, in host order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleHeader {
    /// `0x00MMmm00`: major version in bits 16-23, minor in bits 8-15.
    pub version: u32,
    /// Tool id in bits 16-31, tool-specific version in bits 0-15.
    pub generator: u32,
    /// Every id in the module is below this bound.
    pub bound: u32,
    /// Reserved instruction schema; zero in current modules.
    pub schema: u32,
}

impl ModuleHeader {
    /// Parses the header from the start of `words`.
    ///
    /// # Arguments
    ///
    /// * `words` - Raw in-memory words of the whole module.
    /// * `endian` - Byte order the module was written in.
    ///
    /// # Returns
    ///
    /// The header, [`Error::ShortHeader`] if fewer than five words are present, or
    /// [`Error::BadMagic`] if word 0 is not the magic number after correction.
    pub fn parse(words: &[u32], endian: Endianness) -> Result<Self> {
        let Some(&[magic, version, generator, bound, schema]) = words.get(..MODULE_HEADER_WORDS)
        else {
            return Err(Error::ShortHeader(words.len()));
        };
        let magic = fix_word(magic, endian);
        if magic != MAGIC_NUMBER {
            return Err(Error::BadMagic(magic));
        }
        Ok(Self {
            version: fix_word(version, endian),
            generator: fix_word(generator, endian),
            bound: fix_word(bound, endian),
            schema: fix_word(schema, endian),
        })
    }

    /// Returns `(major, minor)`.
    pub const fn version(&self) -> (u8, u8) {
        ((self.version >> 16) as u8, (self.version >> 8) as u8)
    }

    /// The registry id of the tool that produced the module.
    pub const fn generator_tool(&self) -> u16 {
        vendor::split_generator(self.generator).0
    }

    /// Display name of the producing tool, or `"Unknown"`.
    pub fn generator_name(&self) -> &'static str {
        vendor::generator_name(u32::from(self.generator_tool()))
    }
}
