use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE: Regex = Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").unwrap();
    static ref DATE_TIME: Regex =
        Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})T([0-9]{2})([0-9]{2})[0-9]{2}Z?$").unwrap();
}

/// Renders an iCalendar `DATE` or `DATE-TIME` token for display.
///
/// `YYYYMMDD` becomes `YYYY-MM-DD` and `YYYYMMDDTHHMMSS[Z]` becomes
/// `YYYY-MM-DD HH:MM`. Seconds and the UTC marker are dropped, not converted.
/// Any other token is returned as-is.
pub fn normalize_date(token: Option<&str>) -> Option<String> {
    let token = token?;

    if let Some(c) = DATE.captures(token) {
        return Some(format!("{}-{}-{}", &c[1], &c[2], &c[3]));
    }
    if let Some(c) = DATE_TIME.captures(token) {
        return Some(format!("{}-{}-{} {}:{}", &c[1], &c[2], &c[3], &c[4], &c[5]));
    }

    Some(token.to_string())
}
