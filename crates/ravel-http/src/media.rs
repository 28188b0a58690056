// src/media.rs

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_JSON: &str = "text/json";
pub const APPLICATION_ANY_JSON: &str = "application/*+json";

/// Media types the JSON body writer is registered for. The dispatch layer
/// matches against these; the writer itself never re-checks them.
pub const JSON_MEDIA_TYPES: &[&str] = &[APPLICATION_JSON, APPLICATION_ANY_JSON, TEXT_JSON];

/// True for `application/json`, `text/json` and any `application/*+json`
/// type. Parameters (`; charset=...`) are ignored.
pub fn is_json_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or("").trim();
    if essence.eq_ignore_ascii_case(APPLICATION_JSON) || essence.eq_ignore_ascii_case(TEXT_JSON) {
        return true;
    }
    match essence.split_once('/') {
        Some((ty, subtype)) => {
            let sub = subtype.as_bytes();
            ty.eq_ignore_ascii_case("application")
                && sub.len() > 5
                && sub[sub.len() - 5..].eq_ignore_ascii_case(b"+json")
        }
        None => false,
    }
}
