use super::Symbology;
use serde::Serialize;
use std::collections::BTreeMap;

/// One decoded `(AI, value)` occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiEntry {
    /// Application Identifier code (2-4 characters)
    pub ai: String,
    /// Field value as it appeared in the payload
    pub value: String,
}

impl AiEntry {
    /// Create a new entry
    pub fn new(ai: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ai: ai.into(),
            value: value.into(),
        }
    }
}

/// Which pass produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMethod {
    /// Human-readable `(AI)value` notation
    Parenthesized,
    /// Machine element string with implicit AI lengths
    ElementString,
    /// Digit recovery on a malformed payload
    DigitScan,
}

impl DecodeMethod {
    /// Short name used in tool output
    pub fn label(&self) -> &'static str {
        match self {
            DecodeMethod::Parenthesized => "parenthesized",
            DecodeMethod::ElementString => "element_string",
            DecodeMethod::DigitScan => "digit_scan",
        }
    }
}

/// Structured result of decoding a scan payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    /// Input exactly as handed to the decoder
    pub raw: String,
    /// Symbology announced by the payload prefix, if any
    pub symbology: Option<Symbology>,
    /// Entries in encounter order (an AI may repeat)
    pub entries: Vec<AiEntry>,
    /// AI to value; the last occurrence of a repeated AI wins
    pub fields: BTreeMap<String, String>,
    /// Product identifier from AI 01, else AI 02 (at most 14 digits)
    pub product_identifier: Option<String>,
    /// YYMMDD due date from AI 15
    pub expiry_raw: Option<String>,
    /// Due date as `YYYY-MM-DD`
    pub expiry_iso: Option<String>,
    /// Pass that produced this record
    pub method: DecodeMethod,
}

impl DecodedRecord {
    /// Value of an AI from the field map
    pub fn field(&self, ai: &str) -> Option<&str> {
        self.fields.get(ai).map(String::as_str)
    }

    /// True when neither a product identifier nor an expiry was found
    pub fn is_bare(&self) -> bool {
        self.product_identifier.is_none() && self.expiry_raw.is_none()
    }
}
