/// Renders the UTF-8 bytes of `raw` as lowercase, space-separated hex pairs.
pub fn to_hex_bytes(raw: &str) -> String {
    raw.as_bytes().iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
}
