//! # Configuration Tests
//!
//! Verifies JSON loading, defaults for omitted fields and rejection of
//! malformed documents.

use pretty_assertions::assert_eq;
use spvword_core::config::StreamConfig;
use spvword_core::{Config, Endianness, Error};

#[test]
fn default_is_little_endian_with_header() {
    let config = Config::default();
    assert_eq!(config.stream.endianness, Endianness::Little);
    assert!(config.stream.module_header);
}

#[test]
fn empty_document_yields_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn full_document_overrides_every_field() {
    let config =
        Config::from_json(r#"{ "stream": { "endianness": "big", "module_header": false } }"#)
            .unwrap();
    assert_eq!(
        config,
        Config {
            stream: StreamConfig {
                endianness: Endianness::Big,
                module_header: false,
            },
        }
    );
}

#[test]
fn partial_stream_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "stream": { "module_header": false } }"#).unwrap();
    assert_eq!(config.stream.endianness, Endianness::Little);
    assert!(!config.stream.module_header);
}

#[test]
fn unknown_endianness_is_a_config_error() {
    let err = Config::from_json(r#"{ "stream": { "endianness": "middle" } }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_json(r#"{ "strem": {} }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json("{ stream").is_err());
}
