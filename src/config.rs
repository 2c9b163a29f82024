use std::sync::OnceLock;

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static BARE_DIGIT_FALLBACK: OnceLock<bool> = OnceLock::new();

pub(crate) fn bare_digit_fallback() -> bool {
    *BARE_DIGIT_FALLBACK.get_or_init(|| parse_env_bool_u8("GS1_BARE_DIGIT_FALLBACK", false))
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// True when `GS1_DEBUG` is set
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("GS1_DEBUG").is_ok())
}

/// Decoder behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Run the digit scan even when the payload carries no GS1 evidence
    /// (no symbology prefix, separator or parenthesized marker)
    pub bare_digit_fallback: bool,
}

impl DecoderConfig {
    /// Read switches from the environment (`GS1_BARE_DIGIT_FALLBACK=1`)
    ///
    /// Values are read once per process.
    pub fn from_env() -> Self {
        Self {
            bare_digit_fallback: bare_digit_fallback(),
        }
    }

    /// Enable or disable digit recovery on evidence-free payloads
    pub fn with_bare_digit_fallback(mut self, enabled: bool) -> Self {
        self.bare_digit_fallback = enabled;
        self
    }
}
