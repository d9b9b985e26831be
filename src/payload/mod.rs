//! Classification of decoded payload text and per-kind field extraction.

mod date;
mod extract;
mod fields;
mod kind;

pub use date::normalize_date;
pub use extract::extract;
pub use fields::*;
pub use kind::{classify, PayloadKind};

/// Classifies `raw` and runs the matching extractor.
pub fn parse(raw: &str) -> ParsedFields {
    extract(classify(raw), raw)
}
