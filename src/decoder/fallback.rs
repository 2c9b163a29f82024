/// Digits recovered from a payload the tokenizers could not structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitScan {
    /// 14 digits that followed the first `01`
    pub product_identifier: Option<String>,
    /// 6 digits that followed the first `15`
    pub expiry: Option<String>,
}

const PRODUCT_TAG: &str = "01";
const PRODUCT_LEN: usize = 14;
const EXPIRY_TAG: &str = "15";
const EXPIRY_LEN: usize = 6;

/// Recover a product identifier and/or expiry from the digits of `text`
///
/// Every non-digit is discarded first, so separators, letters and
/// parentheses do not interrupt a match. The two searches are independent.
pub fn scan(text: &str) -> Option<DigitScan> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    let result = DigitScan {
        product_identifier: find_tagged(&digits, PRODUCT_TAG, PRODUCT_LEN),
        expiry: find_tagged(&digits, EXPIRY_TAG, EXPIRY_LEN),
    };

    if result.product_identifier.is_none() && result.expiry.is_none() {
        return None;
    }
    Some(result)
}

/// Leftmost `tag` followed by at least `len` digits
fn find_tagged(digits: &str, tag: &str, len: usize) -> Option<String> {
    let needed = tag.len() + len;
    if digits.len() < needed {
        return None;
    }
    (0..=digits.len() - needed)
        .find(|&i| digits[i..].starts_with(tag))
        .map(|i| digits[i + tag.len()..i + needed].to_string())
}
