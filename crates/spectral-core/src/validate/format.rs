use regex::Regex;
use std::sync::LazyLock;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// scheme://host[:port][/path][?query][#fragment]
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?$")
        .expect("url pattern is a valid regex")
});

pub(crate) fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

pub(crate) fn is_url(s: &str) -> bool {
    URL.is_match(s)
}

/// Calendar date (`2025-10-31`), local date-time as produced by date-time
/// inputs (`2025-10-31T14:30`, with optional seconds), or RFC 3339.
pub(crate) fn is_date(s: &str) -> bool {
    Date::parse(s, format_description!("[year]-[month]-[day]")).is_ok()
        || PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
            .is_ok()
        || PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
        .is_ok()
        || OffsetDateTime::parse(s, &Rfc3339).is_ok()
}
