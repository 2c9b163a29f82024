//! RustGS1 - GS1 element string decoding for barcode scan payloads
//!
//! Turns the text a scanner or camera decoder emits for a GS1-128, GS1
//! DataMatrix or GS1 QR symbol into Application Identifier fields: product
//! identifier (GTIN), due date, batch/lot and the rest.
//!
//! Both the human-readable `(01)...(15)...` notation and raw element strings
//! with implicit AI lengths and `GS` (0x1D) separators are understood.
//! Decoding is pure and allocation-light, so any number of threads can decode
//! at once against the shared AI table.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Decoder configuration (behaviour switches, environment overrides)
pub mod config;
/// GS1 decoding modules (AI table, tokenizers, digit recovery, dates)
pub mod decoder;
/// Core data structures (DecodedRecord, AiEntry, Symbology)
pub mod models;
/// Helpers for the command-line tool (payload files, stats, rendering)
pub mod tools;

pub use config::DecoderConfig;
pub use decoder::GROUP_SEPARATOR;
pub use decoder::ai_table::{AiMatch, AiRule, AiRuleTable, FieldLength};
pub use decoder::date::{Gs1Date, format_gs1_date};
pub use models::{AiEntry, DecodeMethod, DecodedRecord, Symbology};

use decoder::gs1_decoder::Gs1Decoder;
use rayon::prelude::*;

/// Decode a scan payload
///
/// # Arguments
/// * `raw` - Text produced by the scanner, optionally prefixed with a
///   symbology identifier such as `]C1`
///
/// # Returns
/// The decoded record, or `None` if the payload could not be interpreted
///
/// # Example
/// ```
/// let record = rust_gs1::decode("(01)12345678901231(15)251231(10)LOT99").unwrap();
/// assert_eq!(record.product_identifier.as_deref(), Some("12345678901231"));
/// assert_eq!(record.expiry_iso.as_deref(), Some("2025-12-31"));
/// ```
pub fn decode(raw: &str) -> Option<DecodedRecord> {
    Gs1Decoder::decode(raw, &DecoderConfig::default())
}

/// Decode many payloads in parallel
///
/// Results are returned in input order.
pub fn decode_batch<S>(payloads: &[S]) -> Vec<Option<DecodedRecord>>
where
    S: AsRef<str> + Sync,
{
    Decoder::new().decode_batch(payloads)
}

/// Decoder with configuration options
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit settings
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder configured from environment variables
    pub fn from_env() -> Self {
        Self::with_config(DecoderConfig::from_env())
    }

    /// Active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single payload
    pub fn decode(&self, raw: &str) -> Option<DecodedRecord> {
        Gs1Decoder::decode(raw, &self.config)
    }

    /// Decode many payloads in parallel, preserving input order
    pub fn decode_batch<S>(&self, payloads: &[S]) -> Vec<Option<DecodedRecord>>
    where
        S: AsRef<str> + Sync,
    {
        payloads
            .par_iter()
            .map(|payload| Gs1Decoder::decode(payload.as_ref(), &self.config))
            .collect()
    }
}
