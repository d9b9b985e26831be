use serde::Serialize;

use crate::{
    hex::to_hex_bytes,
    payload::{classify, extract, ParsedFields, PayloadKind},
};

/// Symbology reported for every analysis; only QR is supported.
pub const QR_FORMAT: &str = "QR_CODE";

/// Decoder-supplied facts about the scanned symbol.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMetadata {
    pub version: Option<u32>,
    pub mask_pattern: Option<u8>,
}

impl SymbolMetadata {
    pub fn new(version: Option<u32>, mask_pattern: Option<u8>) -> Self {
        Self { version, mask_pattern }
    }
}

/// Everything known about one payload, ready for presentation.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub raw_text: String,
    pub kind: PayloadKind,
    pub fields: ParsedFields,
    pub raw_bytes_hex: String,
    pub format: &'static str,
    pub symbol_metadata: SymbolMetadata,
}

/// Builds the result record from already computed parts.
pub fn assemble(
    raw: &str,
    kind: PayloadKind,
    fields: ParsedFields,
    meta: Option<SymbolMetadata>,
) -> AnalysisResult {
    AnalysisResult {
        raw_text: raw.to_string(),
        kind,
        fields,
        raw_bytes_hex: to_hex_bytes(raw),
        format: QR_FORMAT,
        symbol_metadata: meta.unwrap_or_default(),
    }
}

/// Classifies, extracts and assembles in one go.
pub fn analyze(raw: &str, meta: Option<SymbolMetadata>) -> AnalysisResult {
    let kind = classify(raw);
    tracing::trace!("Classified payload as {kind}");
    let fields = extract(kind, raw);
    assemble(raw, kind, fields, meta)
}

#[cfg(test)]
mod analysis_tests {
    use super::{analyze, SymbolMetadata};
    use crate::payload::PayloadKind;

    #[test]
    fn test_analyze() {
        let meta = SymbolMetadata::new(Some(2), Some(5));
        let res = analyze("geo:1.5,2.5", Some(meta));
        assert_eq!(res.kind, PayloadKind::Geo);
        assert_eq!(res.fields.kind(), PayloadKind::Geo);
        assert_eq!(res.fields.title(), "1.5, 2.5");
        assert_eq!(res.raw_bytes_hex, "67 65 6f 3a 31 2e 35 2c 32 2e 35");
        assert_eq!(res.format, "QR_CODE");
        assert_eq!(res.symbol_metadata, meta);
    }

    #[test]
    fn test_analyze_without_metadata() {
        let res = analyze("AB", None);
        assert_eq!(res.symbol_metadata, SymbolMetadata::default());
        assert_eq!(res.raw_bytes_hex, "41 42");
    }

    #[test]
    fn test_serialized_shape() {
        let meta = SymbolMetadata::new(Some(1), Some(3));
        let res = analyze("WIFI:T:WPA;S:MyNet;P:secret;H:true;", Some(meta));
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["rawText"], "WIFI:T:WPA;S:MyNet;P:secret;H:true;");
        assert_eq!(json["kind"], "WiFi");
        assert_eq!(json["format"], "QR_CODE");
        assert_eq!(json["fields"]["ssid"], "MyNet");
        assert_eq!(json["fields"]["hidden"], true);
        assert_eq!(json["symbolMetadata"]["version"], 1);
        assert_eq!(json["symbolMetadata"]["maskPattern"], 3);
    }

    #[test]
    fn test_serialized_contact_keys() {
        let res = analyze("BEGIN:VCARD\nFN:Ann\nTITLE:CTO\nEND:VCARD", None);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["kind"], "Contact");
        assert_eq!(json["fields"]["jobTitle"], "CTO");
        assert!(json["fields"]["phone"].is_null());
        assert!(json["symbolMetadata"]["version"].is_null());
    }
}
