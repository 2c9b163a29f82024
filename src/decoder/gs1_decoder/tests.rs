use super::*;
use crate::decoder::ai_table::{AiRuleTable, FieldLength};

fn decode(raw: &str) -> Option<DecodedRecord> {
    Gs1Decoder::decode(raw, &DecoderConfig::default())
}

#[test]
fn test_parenthesized_full_record() {
    let record = decode("(01)12345678901231(15)251231(10)LOT99").unwrap();
    assert_eq!(record.method, DecodeMethod::Parenthesized);
    assert_eq!(record.symbology, None);
    assert_eq!(record.field("01"), Some("12345678901231"));
    assert_eq!(record.field("15"), Some("251231"));
    assert_eq!(record.field("10"), Some("LOT99"));
    assert_eq!(record.fields.len(), 3);
    assert_eq!(record.product_identifier.as_deref(), Some("12345678901231"));
    assert_eq!(record.expiry_raw.as_deref(), Some("251231"));
    assert_eq!(record.expiry_iso.as_deref(), Some("2025-12-31"));
}

#[test]
fn test_symbology_prefixed_element_string() {
    let record = decode("]C10112345678901231").unwrap();
    assert_eq!(record.method, DecodeMethod::ElementString);
    assert_eq!(record.symbology, Some(Symbology::Gs1_128));
    assert_eq!(record.entries, vec![AiEntry::new("01", "12345678901231")]);
    assert_eq!(record.expiry_raw, None);
    assert_eq!(record.expiry_iso, None);
}

#[test]
fn test_empty_marker_is_no_result() {
    assert!(decode("(99)").is_none());
    assert!(decode("(01)(15)").is_none());
}

#[test]
fn test_digit_soup_without_evidence() {
    let raw = "xx0112345678901231yy15251231zz";
    assert!(decode(raw).is_none());

    let config = DecoderConfig::default().with_bare_digit_fallback(true);
    let record = Gs1Decoder::decode(raw, &config).unwrap();
    assert_eq!(record.method, DecodeMethod::DigitScan);
    assert_eq!(record.product_identifier.as_deref(), Some("12345678901231"));
    assert_eq!(record.expiry_iso.as_deref(), Some("2025-12-31"));
    assert!(record.entries.is_empty());
    assert!(record.fields.is_empty());
}

#[test]
fn test_loose_due_date() {
    let record = decode("(15)300230").unwrap();
    assert_eq!(record.expiry_raw.as_deref(), Some("300230"));
    assert_eq!(record.expiry_iso.as_deref(), Some("2030-02-30"));
}

#[test]
fn test_encodings_agree() {
    let gs = GROUP_SEPARATOR;
    let parens = decode("(01)12345678901231(10)LOT99(15)251231").unwrap();
    let raw = decode(&format!("]d20112345678901231{gs}10LOT99{gs}15251231")).unwrap();

    assert_eq!(parens.fields, raw.fields);
    assert_eq!(parens.product_identifier, raw.product_identifier);
    assert_eq!(parens.expiry_iso, raw.expiry_iso);
    assert_eq!(raw.symbology, Some(Symbology::Gs1DataMatrix));
}

#[test]
fn test_separator_is_evidence() {
    let record = decode("10ABC\u{1d}21XYZ").unwrap();
    assert_eq!(record.method, DecodeMethod::ElementString);
    assert_eq!(record.field("10"), Some("ABC"));
    assert_eq!(record.field("21"), Some("XYZ"));
    assert!(record.is_bare());
}

#[test]
fn test_duplicate_ai_last_wins() {
    let record = decode("(10)FIRST(21)S1(10)SECOND").unwrap();
    assert_eq!(record.entries.len(), 3);
    assert_eq!(record.entries[0], AiEntry::new("10", "FIRST"));
    assert_eq!(record.entries[2], AiEntry::new("10", "SECOND"));
    assert_eq!(record.field("10"), Some("SECOND"));
    assert_eq!(record.fields.len(), 2);
}

#[test]
fn test_product_identifier_truncation() {
    let long = decode("(01)1234567890123456789").unwrap();
    assert_eq!(long.product_identifier.as_deref(), Some("12345678901234"));

    let short = decode("(01)12345").unwrap();
    assert_eq!(short.product_identifier.as_deref(), Some("12345"));

    let mixed = decode("(01)1234-5678 9012-31").unwrap();
    assert_eq!(mixed.product_identifier.as_deref(), Some("12345678901231"));
}

#[test]
fn test_product_identifier_falls_back_to_02() {
    let record = decode("(02)12345678901231(37)10").unwrap();
    assert_eq!(record.product_identifier.as_deref(), Some("12345678901231"));

    // 01 without digits defers to 02
    let record = decode("(01)N/A(02)98765432109876").unwrap();
    assert_eq!(record.product_identifier.as_deref(), Some("98765432109876"));

    let record = decode("(01)11111111111111(02)22222222222222").unwrap();
    assert_eq!(record.product_identifier.as_deref(), Some("11111111111111"));
}

#[test]
fn test_expiry_truncation() {
    let record = decode("(15)2512319").unwrap();
    assert_eq!(record.expiry_raw.as_deref(), Some("251231"));
    assert_eq!(record.expiry_iso.as_deref(), Some("2025-12-31"));

    let record = decode("(15)2512").unwrap();
    assert_eq!(record.expiry_raw.as_deref(), Some("2512"));
    assert_eq!(record.expiry_iso, None);
}

#[test]
fn test_raw_preserved_and_trimmed_for_parsing() {
    let record = decode("  (10)X  ").unwrap();
    assert_eq!(record.raw, "  (10)X  ");
    assert_eq!(record.field("10"), Some("X"));
}

#[test]
fn test_blank_and_plain_text() {
    assert!(decode("").is_none());
    assert!(decode("   \r\n").is_none());
    assert!(decode("hello world").is_none());
    assert!(decode("0112345678901231").is_none());
}

#[test]
fn test_aborted_element_string_falls_back() {
    let record = decode("]C10112345678901231ZZ").unwrap();
    assert_eq!(record.method, DecodeMethod::DigitScan);
    assert_eq!(record.symbology, Some(Symbology::Gs1_128));
    assert_eq!(record.product_identifier.as_deref(), Some("12345678901231"));
    assert_eq!(record.expiry_raw, None);
}

#[test]
fn test_prefix_only_is_no_result() {
    assert!(decode("]Q3").is_none());
    assert!(decode("]C1\u{1d}").is_none());
}

#[test]
fn test_decode_is_idempotent() {
    let raw = "]C10112345678901231\u{1d}10LOT\u{1d}3103000250";
    assert_eq!(decode(raw), decode(raw));
}

#[test]
fn test_fixed_length_values_match_declared_length() {
    let table = AiRuleTable::global();
    for (code, rule) in table.listing() {
        let FieldLength::Fixed(n) = rule.length else {
            continue;
        };
        let ai = code.replace('n', "2");

        let payload = format!("]C1{}{}", ai, "1".repeat(n));
        let record = decode(&payload).unwrap();
        assert_eq!(record.method, DecodeMethod::ElementString, "AI {}", ai);
        assert_eq!(record.entries[0].ai, ai);
        assert_eq!(record.entries[0].value.chars().count(), n, "AI {}", ai);

        let truncated = format!("]C1{}{}", ai, "1".repeat(n - 1));
        let method = decode(&truncated).map(|r| r.method);
        assert_ne!(method, Some(DecodeMethod::ElementString), "AI {}", ai);
    }
}
