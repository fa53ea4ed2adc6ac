//! Common component tests.

/// Byte-order tags, word correction and byte buffer conversion.
pub mod endian;

/// Error display and classification.
pub mod error;
