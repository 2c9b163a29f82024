use std::collections::HashMap;
use std::sync::OnceLock;

/// Cap applied to 2-digit AIs that have no registered rule
pub const DEFAULT_VARIABLE_MAX: usize = 30;

/// How many value characters follow an AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLength {
    /// Exactly this many characters
    Fixed(usize),
    /// Up to the next field separator, bounded by `max` when set
    Variable {
        /// Upper bound on the value length
        max: Option<usize>,
    },
}

/// Length rule for one Application Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRule {
    /// Number of characters in the AI itself (2, 3 or 4)
    pub ai_length: usize,
    /// Value length rule
    pub length: FieldLength,
    /// GS1 data title
    pub title: &'static str,
}

impl AiRule {
    /// Fixed value length, `None` for variable rules
    pub fn data_length(&self) -> Option<usize> {
        match self.length {
            FieldLength::Fixed(n) => Some(n),
            FieldLength::Variable { .. } => None,
        }
    }

    /// Upper bound of a variable rule, `None` for fixed rules or unbounded ones
    pub fn max_length(&self) -> Option<usize> {
        match self.length {
            FieldLength::Fixed(_) => None,
            FieldLength::Variable { max } => max,
        }
    }

    /// Check if the rule has a fixed value length
    pub fn is_fixed(&self) -> bool {
        matches!(self.length, FieldLength::Fixed(_))
    }

    fn unregistered() -> Self {
        AiRule {
            ai_length: 2,
            length: FieldLength::Variable {
                max: Some(DEFAULT_VARIABLE_MAX),
            },
            title: "UNREGISTERED",
        }
    }
}

/// An AI recognized at some position of an element string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiMatch {
    /// Effective AI, including the variant digit for prefix families
    pub ai: String,
    /// Rule to apply to the value
    pub rule: AiRule,
}

const fn f(n: usize) -> FieldLength {
    FieldLength::Fixed(n)
}

const fn v(max: usize) -> FieldLength {
    FieldLength::Variable { max: Some(max) }
}

type Row = (&'static str, FieldLength, &'static str);

const TWO_DIGIT: &[Row] = &[
    ("00", f(18), "SSCC"),
    ("01", f(14), "GTIN"),
    ("02", f(14), "CONTENT"),
    ("10", v(20), "BATCH/LOT"),
    ("11", f(6), "PROD DATE"),
    ("12", f(6), "DUE DATE"),
    ("13", f(6), "PACK DATE"),
    ("14", f(6), "DATE"),
    ("15", f(6), "BEST BEFORE"),
    ("16", f(6), "SELL BY"),
    ("17", f(6), "USE BY"),
    ("20", f(2), "VARIANT"),
    ("21", v(20), "SERIAL"),
    ("22", v(29), "CPV"),
    ("30", v(8), "VAR. COUNT"),
    ("37", v(8), "COUNT"),
    ("90", v(30), "INTERNAL"),
    ("91", v(30), "INTERNAL"),
    ("92", v(30), "INTERNAL"),
    ("93", v(30), "INTERNAL"),
    ("94", v(30), "INTERNAL"),
    ("95", v(30), "INTERNAL"),
    ("96", v(30), "INTERNAL"),
    ("97", v(3), "INTERNAL"),
    ("98", v(30), "INTERNAL"),
    ("99", v(30), "INTERNAL"),
];

const THREE_DIGIT: &[Row] = &[
    ("240", v(30), "ADDITIONAL ID"),
    ("241", v(30), "CUST. PART No."),
    ("242", v(6), "MTO VARIANT"),
    ("243", v(20), "PCN"),
    ("250", v(30), "SECONDARY SERIAL"),
    ("251", v(30), "REF. TO SOURCE"),
    ("253", v(17), "GDTI"),
    ("254", v(20), "GLN EXTENSION COMPONENT"),
    ("400", v(30), "ORDER NUMBER"),
    ("401", v(30), "GINC"),
    ("402", f(17), "GSIN"),
    ("403", v(30), "ROUTE"),
    ("410", f(13), "SHIP TO LOC"),
    ("411", f(13), "BILL TO"),
    ("412", f(13), "PURCHASE FROM"),
    ("413", f(13), "SHIP FOR LOC"),
    ("414", f(13), "LOC No."),
    ("415", f(13), "PAY TO"),
    ("416", f(13), "PROD/SERV LOC"),
    ("417", f(13), "PARTY"),
    ("420", v(20), "SHIP TO POST"),
    ("421", v(15), "SHIP TO POST"),
    ("422", f(3), "ORIGIN"),
    ("423", v(15), "COUNTRY - INITIAL PROCESS."),
    ("424", f(3), "COUNTRY - PROCESS."),
    ("425", f(3), "COUNTRY - DISASSEMBLY"),
    ("426", f(3), "COUNTRY - FULL PROCESS"),
    ("427", f(3), "ORIGIN SUBDIVISION"),
];

// The fourth digit is a free variant (decimal point position, etc.)
const THREE_DIGIT_PLUS_VARIANT: &[Row] = &[
    ("310", f(6), "NET WEIGHT (kg)"),
    ("311", f(6), "LENGTH (m)"),
    ("312", f(6), "WIDTH (m)"),
    ("313", f(6), "HEIGHT (m)"),
    ("314", f(6), "AREA (m2)"),
    ("315", f(6), "NET VOLUME (l)"),
    ("316", f(6), "NET VOLUME (m3)"),
    ("320", f(6), "NET WEIGHT (lb)"),
    ("321", f(6), "LENGTH (in)"),
    ("322", f(6), "LENGTH (ft)"),
    ("323", f(6), "LENGTH (yd)"),
    ("324", f(6), "WIDTH (in)"),
    ("325", f(6), "WIDTH (ft)"),
    ("326", f(6), "WIDTH (yd)"),
    ("327", f(6), "HEIGHT (in)"),
    ("328", f(6), "HEIGHT (ft)"),
    ("329", f(6), "HEIGHT (yd)"),
    ("330", f(6), "GROSS WEIGHT (kg)"),
    ("331", f(6), "LENGTH (m), log"),
    ("332", f(6), "WIDTH (m), log"),
    ("333", f(6), "HEIGHT (m), log"),
    ("334", f(6), "AREA (m2), log"),
    ("335", f(6), "VOLUME (l), log"),
    ("336", f(6), "VOLUME (m3), log"),
    ("337", f(6), "KG PER m2"),
    ("340", f(6), "GROSS WEIGHT (lb)"),
    ("341", f(6), "LENGTH (in), log"),
    ("342", f(6), "LENGTH (ft), log"),
    ("343", f(6), "LENGTH (yd), log"),
    ("344", f(6), "WIDTH (in), log"),
    ("345", f(6), "WIDTH (ft), log"),
    ("346", f(6), "WIDTH (yd), log"),
    ("347", f(6), "HEIGHT (in), log"),
    ("348", f(6), "HEIGHT (ft), log"),
    ("349", f(6), "HEIGHT (yd), log"),
    ("350", f(6), "AREA (in2)"),
    ("351", f(6), "AREA (ft2)"),
    ("352", f(6), "AREA (yd2)"),
    ("353", f(6), "AREA (in2), log"),
    ("354", f(6), "AREA (ft2), log"),
    ("355", f(6), "AREA (yd2), log"),
    ("356", f(6), "NET WEIGHT (t oz)"),
    ("357", f(6), "NET VOLUME (oz)"),
    ("360", f(6), "NET VOLUME (qt)"),
    ("361", f(6), "NET VOLUME (g)"),
    ("362", f(6), "VOLUME (qt), log"),
    ("363", f(6), "VOLUME (g), log"),
    ("364", f(6), "VOLUME (in3)"),
    ("365", f(6), "VOLUME (ft3)"),
    ("366", f(6), "VOLUME (yd3)"),
    ("367", f(6), "VOLUME (in3), log"),
    ("368", f(6), "VOLUME (ft3), log"),
    ("369", f(6), "VOLUME (yd3), log"),
    ("390", v(15), "AMOUNT"),
    ("391", v(18), "AMOUNT"),
    ("392", v(15), "PRICE"),
    ("393", v(18), "PRICE"),
    ("703", v(30), "PROCESSOR # s"),
];

const FOUR_DIGIT: &[Row] = &[
    ("7001", f(13), "NSN"),
    ("7002", v(30), "MEAT CUT"),
    ("7003", f(10), "EXPIRY TIME"),
    ("8001", f(14), "DIMENSIONS"),
    ("8002", v(20), "CMT No."),
    ("8003", v(30), "GRAI"),
    ("8004", v(30), "GIAI"),
    ("8005", f(6), "PRICE PER UNIT"),
    ("8006", f(18), "ITIP"),
    ("8007", v(30), "IBAN"),
    ("8008", v(12), "PROD TIME"),
    ("8018", f(18), "GSRN - PROVIDER"),
    ("8020", v(25), "REF No."),
    ("8100", f(6), "COUPON"),
    ("8101", f(10), "COUPON"),
    ("8102", f(2), "COUPON"),
    ("8110", v(70), "COUPON"),
    ("8200", v(70), "PRODUCT URL"),
];

/// Registry of AI length rules
///
/// Exact codes live in one map. Families whose fourth digit is a free variant
/// live in a second map keyed by their 3-digit prefix; a hit there consumes
/// four characters.
#[derive(Debug)]
pub struct AiRuleTable {
    exact: HashMap<&'static str, AiRule>,
    variants: HashMap<&'static str, AiRule>,
}

static AI_TABLE: OnceLock<AiRuleTable> = OnceLock::new();

impl AiRuleTable {
    /// Process-wide table, built on first use
    pub fn global() -> &'static AiRuleTable {
        AI_TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut exact = HashMap::new();
        for rows in [TWO_DIGIT, THREE_DIGIT, FOUR_DIGIT] {
            for &(code, length, title) in rows {
                exact.insert(
                    code,
                    AiRule {
                        ai_length: code.len(),
                        length,
                        title,
                    },
                );
            }
        }

        let variants = THREE_DIGIT_PLUS_VARIANT
            .iter()
            .map(|&(prefix, length, title)| {
                (
                    prefix,
                    AiRule {
                        ai_length: 4,
                        length,
                        title,
                    },
                )
            })
            .collect();

        Self { exact, variants }
    }

    /// Exact lookup
    pub fn get(&self, code: &str) -> Option<&AiRule> {
        self.exact.get(code)
    }

    /// Lookup of a variant family by its 3-digit prefix
    pub fn get_variant(&self, prefix: &str) -> Option<&AiRule> {
        self.variants.get(prefix)
    }

    /// Recognize the AI starting at `index`
    ///
    /// Priority: exact 4-character code, variant prefix (when a variant
    /// character follows), exact 3-character code, exact 2-character code,
    /// then any two digits under the unregistered default.
    pub fn match_at(&self, chars: &[char], index: usize) -> Option<AiMatch> {
        let take = |n: usize| -> Option<String> {
            if index + n <= chars.len() {
                Some(chars[index..index + n].iter().collect())
            } else {
                None
            }
        };

        if let Some(four) = take(4) {
            if let Some(rule) = self.exact.get(four.as_str()) {
                return Some(AiMatch { ai: four, rule: *rule });
            }
        }

        if let Some(three) = take(3) {
            if let Some(rule) = self.variants.get(three.as_str()) {
                if let Some(ai) = take(4) {
                    return Some(AiMatch { ai, rule: *rule });
                }
            }
            if let Some(rule) = self.exact.get(three.as_str()) {
                return Some(AiMatch { ai: three, rule: *rule });
            }
        }

        let two = take(2)?;
        if let Some(rule) = self.exact.get(two.as_str()) {
            return Some(AiMatch { ai: two, rule: *rule });
        }
        if two.chars().all(|c| c.is_ascii_digit()) {
            return Some(AiMatch {
                ai: two,
                rule: AiRule::unregistered(),
            });
        }

        None
    }

    /// Rule the tokenizer would apply to a complete AI code
    pub fn resolve(&self, code: &str) -> Option<AiRule> {
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if let Some(rule) = self.exact.get(code) {
            return Some(*rule);
        }
        match code.len() {
            4 => self.variants.get(&code[..3]).copied(),
            2 => Some(AiRule::unregistered()),
            _ => None,
        }
    }

    /// Every registered rule sorted by code; variant families are listed as `310n`
    pub fn listing(&self) -> Vec<(String, AiRule)> {
        let mut rows: Vec<(String, AiRule)> = self
            .exact
            .iter()
            .map(|(code, rule)| (code.to_string(), *rule))
            .chain(
                self.variants
                    .iter()
                    .map(|(prefix, rule)| (format!("{}n", prefix), *rule)),
            )
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }
}
