use lazy_static::lazy_static;
use regex::{Captures, Regex};
use url::{form_urlencoded, Url};

use super::{
    date::normalize_date,
    fields::{
        title_or_raw, truncate_title, ContactFields, EmailFields, EventFields, GeoFields,
        ParsedFields, PhoneFields, SmsFields, TextFields, UrlFields, WhatsAppFields, WifiFields,
    },
    PayloadKind,
};

const DEFAULT_ENCRYPTION: &str = "WPA/WPA2";
const DEFAULT_CONTACT_NAME: &str = "Unknown";
const DEFAULT_EVENT_SUMMARY: &str = "No title";

lazy_static! {
    // WiFi tokens are scanned independently, in any order.
    static ref WIFI_SSID: Regex = Regex::new(r"S:([^;]*)").unwrap();
    static ref WIFI_TYPE: Regex = Regex::new(r"T:([^;]*)").unwrap();
    static ref WIFI_PASSWORD: Regex = Regex::new(r"P:([^;]*)").unwrap();
    static ref WIFI_HIDDEN: Regex = Regex::new(r"H:([^;]*)").unwrap();

    static ref VCARD_NAME: Regex = Regex::new(r"(?im)^FN:([^\r\n]*)").unwrap();
    static ref VCARD_PHONE: Regex = Regex::new(r"(?im)^TEL(?:;[^:\r\n]*)?:([^\r\n]*)").unwrap();
    static ref VCARD_EMAIL: Regex = Regex::new(r"(?im)^EMAIL(?:;[^:\r\n]*)?:([^\r\n]*)").unwrap();
    static ref VCARD_ORG: Regex = Regex::new(r"(?im)^ORG:([^\r\n]*)").unwrap();
    static ref VCARD_TITLE: Regex = Regex::new(r"(?im)^TITLE:([^\r\n]*)").unwrap();
    static ref VCARD_URL: Regex = Regex::new(r"(?im)^URL:([^\r\n]*)").unwrap();

    static ref MAILTO: Regex = Regex::new(r"(?i)^mailto:([^?]*)(?:\?([^\r\n]*))?$").unwrap();
    static ref TEL_PREFIX: Regex = Regex::new(r"(?i)^tel:").unwrap();
    static ref SMS: Regex = Regex::new(r"(?i)^(?:smsto|SMS):([^:]*):?([^\r\n]*)").unwrap();
    static ref GEO: Regex = Regex::new(r"(?i)^geo:([^,]*),([^,]*)(?:,([^,]*))?").unwrap();

    static ref EVENT_SUMMARY: Regex = Regex::new(r"(?im)^SUMMARY:([^\r\n]*)").unwrap();
    static ref EVENT_START: Regex = Regex::new(r"(?im)^DTSTART:([^\r\n]*)").unwrap();
    static ref EVENT_END: Regex = Regex::new(r"(?im)^DTEND:([^\r\n]*)").unwrap();
    static ref EVENT_LOCATION: Regex = Regex::new(r"(?im)^LOCATION:([^\r\n]*)").unwrap();
    static ref EVENT_DESCRIPTION: Regex = Regex::new(r"(?im)^DESCRIPTION:([^\r\n]*)").unwrap();

    static ref WHATSAPP: Regex =
        Regex::new(r"(?i)https://wa\.me/([0-9]+)(?:\?([^\r\n]*))?").unwrap();
}

/// Runs the extractor for `kind` over `raw`. Never fails: sub-fields whose
/// pattern does not match are left empty or absent.
pub fn extract(kind: PayloadKind, raw: &str) -> ParsedFields {
    match kind {
        PayloadKind::Text => ParsedFields::Text(extract_text(raw)),
        PayloadKind::Url => ParsedFields::Url(extract_url(raw)),
        PayloadKind::WiFi => ParsedFields::WiFi(extract_wifi(raw)),
        PayloadKind::Contact => ParsedFields::Contact(extract_contact(raw)),
        PayloadKind::Email => ParsedFields::Email(extract_email(raw)),
        PayloadKind::Phone => ParsedFields::Phone(extract_phone(raw)),
        PayloadKind::Sms => ParsedFields::Sms(extract_sms(raw)),
        PayloadKind::Geo => ParsedFields::Geo(extract_geo(raw)),
        PayloadKind::CalendarEvent => ParsedFields::CalendarEvent(extract_event(raw)),
        PayloadKind::WhatsApp => ParsedFields::WhatsApp(extract_whatsapp(raw)),
    }
}

// Helpers
//------------------------------------------------------------------------------

fn first_capture(pattern: &Regex, raw: &str) -> Option<String> {
    pattern.captures(raw).and_then(|c| group(&c, 1))
}

fn group(caps: &Captures, i: usize) -> Option<String> {
    caps.get(i).map(|m| m.as_str().to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// First value of `key` in an `application/x-www-form-urlencoded` query.
fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

// Extractors
//------------------------------------------------------------------------------

fn extract_text(raw: &str) -> TextFields {
    TextFields { title: truncate_title(raw), text: raw.to_string() }
}

fn extract_url(raw: &str) -> UrlFields {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => {
            return UrlFields {
                title: raw.to_string(),
                url: raw.to_string(),
                protocol: None,
                domain: None,
                path: None,
                query: None,
            }
        }
    };

    let host = url.host_str().map(str::to_string);
    UrlFields {
        title: title_or_raw(host.as_deref().unwrap_or_default(), raw),
        url: raw.to_string(),
        protocol: Some(url.scheme().to_string()),
        domain: host,
        path: Some(url.path().to_string()),
        query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
    }
}

fn extract_wifi(raw: &str) -> WifiFields {
    let ssid = first_capture(&WIFI_SSID, raw).unwrap_or_default();
    let encryption = non_empty(first_capture(&WIFI_TYPE, raw))
        .unwrap_or_else(|| DEFAULT_ENCRYPTION.to_string());
    let password = first_capture(&WIFI_PASSWORD, raw).unwrap_or_default();
    let hidden = first_capture(&WIFI_HIDDEN, raw).is_some_and(|h| h.eq_ignore_ascii_case("true"));

    WifiFields { title: title_or_raw(&ssid, raw), ssid, password, encryption, hidden }
}

fn extract_contact(raw: &str) -> ContactFields {
    let name = first_capture(&VCARD_NAME, raw).unwrap_or_else(|| DEFAULT_CONTACT_NAME.to_string());

    ContactFields {
        title: title_or_raw(&name, raw),
        name,
        phone: first_capture(&VCARD_PHONE, raw),
        email: first_capture(&VCARD_EMAIL, raw),
        organization: first_capture(&VCARD_ORG, raw),
        job_title: first_capture(&VCARD_TITLE, raw),
        url: first_capture(&VCARD_URL, raw),
    }
}

fn extract_email(raw: &str) -> EmailFields {
    let caps = MAILTO.captures(raw);
    let email = caps.as_ref().and_then(|c| group(c, 1)).unwrap_or_default();
    let query = caps.as_ref().and_then(|c| group(c, 2)).unwrap_or_default();

    EmailFields {
        title: title_or_raw(&email, raw),
        email,
        subject: non_empty(query_param(&query, "subject")),
        body: non_empty(query_param(&query, "body")),
    }
}

fn extract_phone(raw: &str) -> PhoneFields {
    let number = TEL_PREFIX.replace(raw, "").into_owned();
    PhoneFields { title: title_or_raw(&number, raw), number }
}

fn extract_sms(raw: &str) -> SmsFields {
    let caps = SMS.captures(raw);
    let number = caps.as_ref().and_then(|c| group(c, 1));
    let message = caps.as_ref().and_then(|c| group(c, 2));

    SmsFields {
        title: title_or_raw(number.as_deref().unwrap_or_default(), raw),
        number,
        message,
    }
}

fn extract_geo(raw: &str) -> GeoFields {
    let Some(caps) = GEO.captures(raw) else {
        let title = truncate_title(raw);
        return GeoFields { title, latitude: None, longitude: None, altitude: None };
    };

    let latitude = group(&caps, 1);
    let longitude = group(&caps, 2);
    let label = format!(
        "{}, {}",
        latitude.as_deref().unwrap_or_default(),
        longitude.as_deref().unwrap_or_default()
    );

    GeoFields { title: label, latitude, longitude, altitude: non_empty(group(&caps, 3)) }
}

fn extract_event(raw: &str) -> EventFields {
    let summary =
        first_capture(&EVENT_SUMMARY, raw).unwrap_or_else(|| DEFAULT_EVENT_SUMMARY.to_string());

    EventFields {
        title: title_or_raw(&summary, raw),
        summary,
        start: normalize_date(first_capture(&EVENT_START, raw).as_deref()),
        end: normalize_date(first_capture(&EVENT_END, raw).as_deref()),
        location: first_capture(&EVENT_LOCATION, raw),
        description: first_capture(&EVENT_DESCRIPTION, raw),
    }
}

fn extract_whatsapp(raw: &str) -> WhatsAppFields {
    let caps = WHATSAPP.captures(raw);
    let number = caps.as_ref().and_then(|c| group(c, 1));
    let query = caps.as_ref().and_then(|c| group(c, 2)).unwrap_or_default();
    let message = non_empty(query_param(&query, "text"))
        .or_else(|| non_empty(query_param(&query, "message")));

    WhatsAppFields {
        title: title_or_raw(number.as_deref().unwrap_or_default(), raw),
        number,
        message,
    }
}
