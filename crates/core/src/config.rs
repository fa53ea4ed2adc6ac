//! Configuration for word-stream decoding.
//!
//! This module defines the configuration structures used by tools built on the codec:
//! 1. **Defaults:** Little-endian input with a leading module header.
//! 2. **Structures:** A root [`Config`] holding a [`StreamConfig`].
//!
//! Configuration is supplied as JSON (`Config::from_json`) or taken from `Config::default()`.

use serde::Deserialize;

use crate::common::endian::Endianness;
use crate::common::error::{Error, Result};

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How raw word streams are read.
    pub stream: StreamConfig,
}

/// Word-stream settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamConfig {
    /// Byte order of the input words.
    pub endianness: Endianness,
    /// Whether the stream starts with the five-word module header.
    pub module_header: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endianness: Endianness::Little,
            module_header: true,
        }
    }
}

impl Config {
    /// Parses a JSON configuration document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}
