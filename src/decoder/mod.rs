//! GS1 element string decoding modules
//!
//! This module contains the stages that turn a scan payload into AI fields:
//! - Symbology identifier stripping
//! - AI length rules (fixed, variable, variant-digit families)
//! - Parenthesized and raw element string tokenizers
//! - Digit recovery for malformed payloads
//! - YYMMDD date formatting

/// AI length rule registry
pub mod ai_table;
/// YYMMDD date parsing and formatting
pub mod date;
/// Raw element string tokenizer (implicit AI lengths, FNC1 separators)
pub mod element_string;
/// Digit recovery for payloads the tokenizers reject
pub mod fallback;
/// Main decoder that orchestrates the passes
pub mod gs1_decoder;
pub mod parenthesized;
/// Symbology identifier prefix resolver
pub mod symbology;

/// Field separator (ASCII GS, the FNC1 stand-in in scanner output)
pub const GROUP_SEPARATOR: char = '\u{1d}';
