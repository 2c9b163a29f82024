/// Calendar date carried in a YYMMDD field
///
/// Validation is structural only: month 1-12 and day 1-31, with no
/// per-month or leap-year check, so `300230` parses as 2030-02-30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gs1Date {
    /// Full year, always 2000 + YY
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day (1-31)
    pub day: u8,
}

impl Gs1Date {
    /// Parse a 6-digit YYMMDD value
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: u16 = value[0..2].parse().ok()?;
        let month: u8 = value[2..4].parse().ok()?;
        let day: u8 = value[4..6].parse().ok()?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        Some(Self {
            year: 2000 + year,
            month,
            day,
        })
    }
}

impl std::fmt::Display for Gs1Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Format a YYMMDD value as `YYYY-MM-DD`
pub fn format_gs1_date(value: &str) -> Option<String> {
    Gs1Date::parse(value).map(|date| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_gs1_date("251231").as_deref(), Some("2025-12-31"));
        assert_eq!(format_gs1_date("000101").as_deref(), Some("2000-01-01"));
        assert_eq!(format_gs1_date("990615").as_deref(), Some("2099-06-15"));
    }

    #[test]
    fn test_loose_calendar() {
        assert_eq!(format_gs1_date("300230").as_deref(), Some("2030-02-30"));
        assert_eq!(format_gs1_date("250431").as_deref(), Some("2025-04-31"));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(format_gs1_date(""), None);
        assert_eq!(format_gs1_date("25123"), None);
        assert_eq!(format_gs1_date("2512311"), None);
        assert_eq!(format_gs1_date("25A231"), None);
        assert_eq!(format_gs1_date("251300"), None);
        assert_eq!(format_gs1_date("250001"), None);
        assert_eq!(format_gs1_date("251200"), None);
        assert_eq!(format_gs1_date("251232"), None);
        assert_eq!(format_gs1_date("+25123"), None);
    }

    #[test]
    fn test_parse_fields() {
        let date = Gs1Date::parse("270305").unwrap();
        assert_eq!((date.year, date.month, date.day), (2027, 3, 5));
    }
}
