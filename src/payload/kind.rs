use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

// Payload kind
//------------------------------------------------------------------------------

/// Well-known conventions a decoded QR payload can follow.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize)]
pub enum PayloadKind {
    #[default]
    Text,
    #[serde(rename = "URL")]
    Url,
    WiFi,
    Contact,
    Email,
    Phone,
    #[serde(rename = "SMS")]
    Sms,
    Geo,
    CalendarEvent,
    WhatsApp,
}

impl PayloadKind {
    /// Every kind, in classification order, with the `Text` fallback last.
    pub const ALL: [PayloadKind; 10] = [
        Self::Url,
        Self::WiFi,
        Self::Contact,
        Self::Email,
        Self::Phone,
        Self::Sms,
        Self::Geo,
        Self::CalendarEvent,
        Self::WhatsApp,
        Self::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "URL",
            Self::WiFi => "WiFi",
            Self::Contact => "Contact",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Sms => "SMS",
            Self::Geo => "Geo",
            Self::CalendarEvent => "Calendar Event",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

impl Display for PayloadKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Classifier
//------------------------------------------------------------------------------

lazy_static! {
    // First match wins. URL precedes WhatsApp, so `https://wa.me/` links
    // classify as URL.
    static ref RULES: [(Regex, PayloadKind); 9] = [
        (Regex::new(r"(?i)^https?://").unwrap(), PayloadKind::Url),
        (Regex::new(r"(?i)^WIFI:").unwrap(), PayloadKind::WiFi),
        (Regex::new(r"(?i)BEGIN:VCARD").unwrap(), PayloadKind::Contact),
        (Regex::new(r"(?i)^mailto:").unwrap(), PayloadKind::Email),
        (Regex::new(r"(?i)^tel:").unwrap(), PayloadKind::Phone),
        (Regex::new(r"(?i)^(?:smsto|SMS):").unwrap(), PayloadKind::Sms),
        (Regex::new(r"(?i)^geo:").unwrap(), PayloadKind::Geo),
        (Regex::new(r"(?i)BEGIN:VEVENT").unwrap(), PayloadKind::CalendarEvent),
        (Regex::new(r"(?i)^https://wa\.me/").unwrap(), PayloadKind::WhatsApp),
    ];
}

/// Picks the kind of `raw` by testing each rule in order.
pub fn classify(raw: &str) -> PayloadKind {
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(raw))
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}
