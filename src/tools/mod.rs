use crate::decoder::ai_table::{AiRuleTable, FieldLength};
use crate::models::DecodedRecord;
use crate::GROUP_SEPARATOR;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the command-line tooling
#[derive(Debug, Error)]
pub enum ToolError {
    /// Payload file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Result could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typeable spellings of the field separator accepted in text input
const SEPARATOR_SPELLINGS: [&str; 7] = [
    "<GS>", "{GS}", "\\x1d", "\\x1D", "\\u001d", "\\u001D", "^]",
];

/// Replace typeable separator spellings with the real 0x1D character.
pub fn unescape_separators(text: &str) -> String {
    let separator = GROUP_SEPARATOR.to_string();
    SEPARATOR_SPELLINGS
        .iter()
        .fold(text.to_string(), |acc, spelling| acc.replace(spelling, &separator))
}

/// Replace 0x1D with `<GS>` so payloads print legibly.
pub fn escape_separators(text: &str) -> String {
    text.replace(GROUP_SEPARATOR, "<GS>")
}

/// One line of a payload file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Scan text with separators unescaped.
    pub text: String,
    /// Expected product identifier, when the line carries a label.
    pub expected: Option<String>,
}

/// Read a payload file.
///
/// One payload per line; blank lines and lines starting with `#` are skipped.
/// A tab may follow the payload with the expected product identifier, in
/// which case [`decode_stats`] also counts matches.
pub fn read_payloads<P: AsRef<Path>>(path: P) -> Result<Vec<Payload>, ToolError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_payloads(&contents))
}

fn parse_payloads(contents: &str) -> Vec<Payload> {
    let mut payloads = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let (text, expected) = match line.split_once('\t') {
            Some((text, label)) => {
                let label = label.trim();
                (text, if label.is_empty() { None } else { Some(label.to_string()) })
            }
            None => (line, None),
        };
        payloads.push(Payload {
            text: unescape_separators(text),
            expected,
        });
    }
    payloads
}

/// Summary statistics for a batch of decode results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Payloads attempted.
    pub total: usize,
    /// Payloads that produced a record.
    pub decoded: usize,
    /// Records carrying a product identifier.
    pub with_product_identifier: usize,
    /// Records carrying a formatted due date.
    pub with_expiry: usize,
    /// Payloads that had an expected product identifier.
    pub labeled: usize,
    /// Labeled payloads whose product identifier matched.
    pub matched: usize,
}

impl DecodeStats {
    /// Share of payloads that decoded (0.0 - 1.0).
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.decoded as f64 / self.total as f64
        }
    }

    /// Share of labeled payloads that matched their label (0.0 - 1.0).
    pub fn match_rate(&self) -> f64 {
        if self.labeled == 0 {
            0.0
        } else {
            self.matched as f64 / self.labeled as f64
        }
    }
}

/// Compute stats for results paired with their payloads.
pub fn decode_stats(payloads: &[Payload], results: &[Option<DecodedRecord>]) -> DecodeStats {
    let mut stats = DecodeStats {
        total: results.len(),
        ..DecodeStats::default()
    };

    for (payload, result) in payloads.iter().zip(results) {
        if let Some(record) = result {
            stats.decoded += 1;
            if record.product_identifier.is_some() {
                stats.with_product_identifier += 1;
            }
            if record.expiry_iso.is_some() {
                stats.with_expiry += 1;
            }
        }
        if let Some(expected) = &payload.expected {
            stats.labeled += 1;
            let found = result.as_ref().and_then(|r| r.product_identifier.as_deref());
            if found == Some(expected.as_str()) {
                stats.matched += 1;
            }
        }
    }

    stats
}

/// Short length description such as `N14` or `..20`.
pub fn describe_length(length: &FieldLength) -> String {
    match length {
        FieldLength::Fixed(n) => format!("N{}", n),
        FieldLength::Variable { max: Some(max) } => format!("..{}", max),
        FieldLength::Variable { max: None } => "..".to_string(),
    }
}

/// Multi-line human-readable rendering of a record.
pub fn render_record(record: &DecodedRecord) -> String {
    let table = AiRuleTable::global();
    let mut out = format!(
        "Raw: {}\nSymbology: {}\nMethod: {}\n",
        escape_separators(&record.raw),
        record.symbology.map_or("none", |s| s.label()),
        record.method.label()
    );

    if !record.entries.is_empty() {
        out.push_str("Entries:\n");
        for entry in &record.entries {
            let title = table.resolve(&entry.ai).map_or("UNKNOWN", |rule| rule.title);
            out.push_str(&format!("  ({}) {} = {}\n", entry.ai, title, entry.value));
        }
    }

    out.push_str(&format!(
        "Product identifier: {}\n",
        record.product_identifier.as_deref().unwrap_or("-")
    ));
    let expiry = match (&record.expiry_raw, &record.expiry_iso) {
        (Some(raw), Some(iso)) => format!("{} ({})", raw, iso),
        (Some(raw), None) => format!("{} (invalid date)", raw),
        _ => "-".to_string(),
    };
    out.push_str(&format!("Expiry: {}\n", expiry));

    out
}
