use crate::config::DecoderConfig;
use crate::decoder::GROUP_SEPARATOR;
use crate::decoder::date::format_gs1_date;
use crate::decoder::symbology::strip_symbology;
use crate::decoder::{element_string, fallback, parenthesized};
use crate::models::{AiEntry, DecodeMethod, DecodedRecord, Symbology};
use std::collections::BTreeMap;
use tracing::{debug, trace};

const PRODUCT_ID_LEN: usize = 14;
const DATE_LEN: usize = 6;

/// Main GS1 decoder that processes one scan payload
pub struct Gs1Decoder;

impl Gs1Decoder {
    /// Decode a scan payload into a structured record
    ///
    /// Returns `None` when the payload cannot be interpreted; callers should
    /// fall back to manual entry rather than treat it as an error.
    pub fn decode(raw: &str, config: &DecoderConfig) -> Option<DecodedRecord> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Step 1: Symbology identifier
        let (symbology, text) = strip_symbology(trimmed);
        if let Some(symbology) = symbology {
            trace!(symbology = symbology.label(), "stripped symbology identifier");
        }

        // Step 2: Collect GS1 evidence
        let has_markers = parenthesized::has_markers(text);
        let has_evidence = symbology.is_some() || text.contains(GROUP_SEPARATOR) || has_markers;

        // Step 3: Tokenize
        let tokenized = if has_markers {
            Self::parenthesized_pass(text)
        } else if has_evidence {
            element_string::tokenize(text)
                .filter(|entries| !entries.is_empty())
                .map(|entries| (entries, DecodeMethod::ElementString))
        } else {
            None
        };

        if let Some((entries, method)) = tokenized {
            return Some(Self::build_record(raw, symbology, entries, method));
        }

        // Step 4: Digit recovery
        if !has_evidence && !config.bare_digit_fallback {
            trace!("no GS1 evidence, skipping digit scan");
            return None;
        }
        Self::digit_scan_record(raw, symbology, text)
    }

    fn parenthesized_pass(text: &str) -> Option<(Vec<AiEntry>, DecodeMethod)> {
        let entries = parenthesized::tokenize(text);
        if entries.iter().all(|entry| entry.value.is_empty()) {
            debug!(markers = entries.len(), "parenthesized markers carry no values");
            return None;
        }
        Some((entries, DecodeMethod::Parenthesized))
    }

    fn build_record(
        raw: &str,
        symbology: Option<Symbology>,
        entries: Vec<AiEntry>,
        method: DecodeMethod,
    ) -> DecodedRecord {
        let mut fields = BTreeMap::new();
        for entry in &entries {
            fields.insert(entry.ai.clone(), entry.value.clone());
        }

        let product_identifier = digits_of(fields.get("01"))
            .or_else(|| digits_of(fields.get("02")))
            .map(|digits| truncate_digits(digits, PRODUCT_ID_LEN));
        let expiry_raw = digits_of(fields.get("15")).map(|digits| truncate_digits(digits, DATE_LEN));
        let expiry_iso = expiry_raw.as_deref().and_then(format_gs1_date);

        DecodedRecord {
            raw: raw.to_string(),
            symbology,
            entries,
            fields,
            product_identifier,
            expiry_raw,
            expiry_iso,
            method,
        }
    }

    fn digit_scan_record(
        raw: &str,
        symbology: Option<Symbology>,
        text: &str,
    ) -> Option<DecodedRecord> {
        let Some(scan) = fallback::scan(text) else {
            debug!("digit scan found no product identifier or due date");
            return None;
        };
        debug!(
            product_identifier = scan.product_identifier.is_some(),
            expiry = scan.expiry.is_some(),
            "recovered digits from unstructured payload"
        );

        let expiry_iso = scan.expiry.as_deref().and_then(format_gs1_date);
        Some(DecodedRecord {
            raw: raw.to_string(),
            symbology,
            entries: Vec::new(),
            fields: BTreeMap::new(),
            product_identifier: scan.product_identifier,
            expiry_raw: scan.expiry,
            expiry_iso,
            method: DecodeMethod::DigitScan,
        })
    }
}

/// ASCII digits of a field value, `None` if there are none
fn digits_of(value: Option<&String>) -> Option<String> {
    let digits: String = value?.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// Keep the first `len` digits of longer values; shorter values pass through
fn truncate_digits(mut digits: String, len: usize) -> String {
    digits.truncate(len);
    digits
}

#[cfg(test)]
mod tests;
