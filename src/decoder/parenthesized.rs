//! Human-readable `(AI)value(AI)value` notation
//!
//! Marker boundaries are trusted as-is, so the AI table is never consulted
//! here.

use super::GROUP_SEPARATOR;
use crate::models::AiEntry;

/// A `(NN)` marker, as byte offsets into the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    start: usize,
    end: usize,
}

impl Marker {
    fn ai<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + 1..self.end - 1]
    }
}

/// Find `(` + 2-4 ASCII digits + `)` markers, left to right, non-overlapping
fn find_markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            let digits_start = i + 1;
            let mut j = digits_start;
            while j < bytes.len() && j - digits_start < 4 && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j - digits_start >= 2 && j < bytes.len() && bytes[j] == b')' {
                markers.push(Marker { start: i, end: j + 1 });
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }

    markers
}

/// Check for at least one `(NN)` marker
pub fn has_markers(text: &str) -> bool {
    !find_markers(text).is_empty()
}

/// Split parenthesized text into entries
///
/// Each value runs to the next marker (or the end of the text) with field
/// separators removed. Text before the first marker is dropped.
pub fn tokenize(text: &str) -> Vec<AiEntry> {
    let markers = find_markers(text);

    markers
        .iter()
        .enumerate()
        .map(|(idx, marker)| {
            let value_end = markers.get(idx + 1).map_or(text.len(), |next| next.start);
            let value: String = text[marker.end..value_end]
                .chars()
                .filter(|&c| c != GROUP_SEPARATOR)
                .collect();
            AiEntry::new(marker.ai(text), value)
        })
        .collect()
}
