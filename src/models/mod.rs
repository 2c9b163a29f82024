/// Decoded records and their entries
pub mod record;
/// Symbology identifiers
pub mod symbology;

pub use record::{AiEntry, DecodeMethod, DecodedRecord};
pub use symbology::Symbology;
