use serde::Serialize;

use super::PayloadKind;

const TITLE_LIMIT: usize = 50;
const TITLE_KEEP: usize = 47;

/// Shortens `raw` to 47 characters plus `...` when it is longer than 50.
pub fn truncate_title(raw: &str) -> String {
    if raw.chars().count() > TITLE_LIMIT {
        let mut title: String = raw.chars().take(TITLE_KEEP).collect();
        title.push_str("...");
        title
    } else {
        raw.to_string()
    }
}

/// Uses `label` as the title unless it is empty, in which case the truncated
/// raw text stands in.
pub(crate) fn title_or_raw(label: &str, raw: &str) -> String {
    if label.is_empty() {
        truncate_title(raw)
    } else {
        label.to_string()
    }
}

// Field records
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TextFields {
    pub title: String,
    pub text: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct UrlFields {
    pub title: String,
    pub url: String,
    pub protocol: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct WifiFields {
    pub title: String,
    pub ssid: String,
    pub password: String,
    pub encryption: String,
    pub hidden: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub title: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct EmailFields {
    pub title: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PhoneFields {
    pub title: String,
    pub number: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct SmsFields {
    pub title: String,
    pub number: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct GeoFields {
    pub title: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub altitude: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct EventFields {
    pub title: String,
    pub summary: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct WhatsAppFields {
    pub title: String,
    pub number: Option<String>,
    pub message: Option<String>,
}

// Parsed fields
//------------------------------------------------------------------------------

/// Structured interpretation of a payload, one variant per [`PayloadKind`].
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum ParsedFields {
    Text(TextFields),
    Url(UrlFields),
    WiFi(WifiFields),
    Contact(ContactFields),
    Email(EmailFields),
    Phone(PhoneFields),
    Sms(SmsFields),
    Geo(GeoFields),
    CalendarEvent(EventFields),
    WhatsApp(WhatsAppFields),
}

impl ParsedFields {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Text(_) => PayloadKind::Text,
            Self::Url(_) => PayloadKind::Url,
            Self::WiFi(_) => PayloadKind::WiFi,
            Self::Contact(_) => PayloadKind::Contact,
            Self::Email(_) => PayloadKind::Email,
            Self::Phone(_) => PayloadKind::Phone,
            Self::Sms(_) => PayloadKind::Sms,
            Self::Geo(_) => PayloadKind::Geo,
            Self::CalendarEvent(_) => PayloadKind::CalendarEvent,
            Self::WhatsApp(_) => PayloadKind::WhatsApp,
        }
    }

    /// Short label for compact display.
    pub fn title(&self) -> &str {
        match self {
            Self::Text(f) => &f.title,
            Self::Url(f) => &f.title,
            Self::WiFi(f) => &f.title,
            Self::Contact(f) => &f.title,
            Self::Email(f) => &f.title,
            Self::Phone(f) => &f.title,
            Self::Sms(f) => &f.title,
            Self::Geo(f) => &f.title,
            Self::CalendarEvent(f) => &f.title,
            Self::WhatsApp(f) => &f.title,
        }
    }

    /// Label/value pairs for the populated sub-fields, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let mut push = |label: &'static str, value: Option<&String>| {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                out.push((label, v.clone()));
            }
        };

        match self {
            Self::Text(f) => push("Text", Some(&f.text)),
            Self::Url(f) => {
                push("URL", Some(&f.url));
                push("Domain", f.domain.as_ref());
                push("Path", f.path.as_ref());
                push("Query", f.query.as_ref());
            }
            Self::WiFi(f) => {
                push("SSID", Some(&f.ssid));
                push("Encryption", Some(&f.encryption));
                push("Password", Some(&f.password));
                push("Hidden", Some(&f.hidden.to_string()));
            }
            Self::Contact(f) => {
                push("Name", Some(&f.name));
                push("Phone", f.phone.as_ref());
                push("Email", f.email.as_ref());
                push("Organization", f.organization.as_ref());
                push("Title", f.job_title.as_ref());
                push("URL", f.url.as_ref());
            }
            Self::Email(f) => {
                push("Email", Some(&f.email));
                push("Subject", f.subject.as_ref());
                push("Body", f.body.as_ref());
            }
            Self::Phone(f) => push("Number", Some(&f.number)),
            Self::Sms(f) => {
                push("Number", f.number.as_ref());
                push("Message", f.message.as_ref());
            }
            Self::Geo(f) => {
                push("Latitude", f.latitude.as_ref());
                push("Longitude", f.longitude.as_ref());
                push("Altitude", f.altitude.as_ref());
            }
            Self::CalendarEvent(f) => {
                push("Summary", Some(&f.summary));
                push("Start", f.start.as_ref());
                push("End", f.end.as_ref());
                push("Location", f.location.as_ref());
                push("Description", f.description.as_ref());
            }
            Self::WhatsApp(f) => {
                push("Number", f.number.as_ref());
                push("Message", f.message.as_ref());
            }
        }

        out
    }
}
