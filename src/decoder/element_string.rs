use super::GROUP_SEPARATOR;
use super::ai_table::{AiMatch, AiRuleTable, FieldLength};
use crate::models::AiEntry;
use tracing::debug;

/// Tokenize a raw element string with implicit AI lengths
///
/// All-or-nothing: an unrecognized AI or a truncated fixed-length value
/// returns `None` instead of a partial entry list. Lengths are counted in
/// characters.
pub fn tokenize(text: &str) -> Option<Vec<AiEntry>> {
    let table = AiRuleTable::global();
    let chars: Vec<char> = text
        .chars()
        .filter(|&c| c == GROUP_SEPARATOR || !c.is_whitespace())
        .collect();

    let mut entries = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        if chars[index] == GROUP_SEPARATOR {
            index += 1;
            continue;
        }

        let Some(AiMatch { ai, rule }) = table.match_at(&chars, index) else {
            debug!(position = index, "unrecognized AI, dropping element string pass");
            return None;
        };

        let start = index + rule.ai_length;
        let end = value_end(&chars, start, rule.length);

        if end > chars.len() {
            debug!(
                ai = %ai,
                needed = end - start,
                available = chars.len() - start,
                "truncated fixed-length value, dropping element string pass"
            );
            return None;
        }

        entries.push(AiEntry::new(ai, chars[start..end].iter().collect::<String>()));
        index = end;
    }

    Some(entries)
}

/// End of the value starting at `start`
///
/// Variable values only look for a separator inside their `max` window, so
/// each character is inspected at most once per pass. Fixed values may
/// return an end past the input, which the caller treats as truncation.
fn value_end(chars: &[char], start: usize, length: FieldLength) -> usize {
    match length {
        FieldLength::Fixed(n) => start + n,
        FieldLength::Variable { max } => {
            let window_end = max.map_or(chars.len(), |m| start + m).min(chars.len());
            chars[start..window_end]
                .iter()
                .position(|&c| c == GROUP_SEPARATOR)
                .map_or(window_end, |offset| start + offset)
        }
    }
}
