use serde::Serialize;

/// Physical barcode type announced by a symbology identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbology {
    /// Linear GS1-128 (`]C1`)
    #[serde(rename = "GS1-128")]
    Gs1_128,
    /// GS1 DataMatrix (`]d2`)
    #[serde(rename = "GS1 DataMatrix")]
    Gs1DataMatrix,
    /// GS1 QR Code (`]Q3`)
    #[serde(rename = "GS1 QR")]
    Gs1Qr,
}

impl Symbology {
    /// Look up a 3-character symbology identifier.
    ///
    /// Only the spellings scanners are known to emit are accepted, so `]C1`
    /// and `]c1` both resolve but `]D2` does not.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "]C1" | "]c1" => Some(Symbology::Gs1_128),
            "]d2" => Some(Symbology::Gs1DataMatrix),
            "]Q3" | "]q3" => Some(Symbology::Gs1Qr),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Symbology::Gs1_128 => "GS1-128",
            Symbology::Gs1DataMatrix => "GS1 DataMatrix",
            Symbology::Gs1Qr => "GS1 QR",
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
