use cookie::{Cookie, SameSite};

use super::*;
use crate::util::testing::MemoryCookies;

// =============================================================
// Codec
// =============================================================

#[test]
fn format_set_cookie_carries_scope_and_flags() {
    let header = format_set_cookie("auth_token", "t1", 7);
    let parsed = Cookie::parse_encoded(header.as_str()).unwrap();
    assert_eq!(parsed.name(), "auth_token");
    assert_eq!(parsed.value(), "t1");
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.secure(), Some(true));
    assert_eq!(parsed.same_site(), Some(SameSite::Strict));
    assert_eq!(parsed.max_age(), Some(Duration::days(7)));
}

#[test]
fn format_set_cookie_negative_ttl_expires_immediately() {
    let header = format_set_cookie("auth_token", "", -1);
    assert!(header.starts_with("auth_token=;"));
    assert!(header.contains("Max-Age=-86400"));
    let parsed = Cookie::parse_encoded(header.as_str()).unwrap();
    assert_eq!(parsed.max_age(), Some(Duration::ZERO));
}

#[test]
fn format_set_cookie_caps_lifetime() {
    let header = format_set_cookie("auth_token", "t1", 10_000);
    let parsed = Cookie::parse_encoded(header.as_str()).unwrap();
    assert_eq!(parsed.max_age(), Some(Duration::days(MAX_LIFETIME_DAYS)));
}

#[test]
fn format_set_cookie_escapes_reserved_characters() {
    let header = format_set_cookie("user_data", "a;b,c=d e", 7);
    let (pair, _) = header.split_once(';').unwrap();
    let (_, encoded) = pair.split_once('=').unwrap();
    assert!(!encoded.contains(','));
    assert!(!encoded.contains('='));
    assert!(!encoded.contains(' '));
    assert_eq!(decode_value(encoded), "a;b,c=d e");
}

#[test]
fn decode_value_keeps_malformed_escapes_verbatim() {
    assert_eq!(decode_value("%E0%A4%A"), "%E0%A4%A");
}

#[test]
fn read_cookie_finds_named_value() {
    let header = "theme=dark; auth_token=abc%20def; user_data=%7B%7D";
    assert_eq!(read_cookie(header, "auth_token"), "abc def");
    assert_eq!(read_cookie(header, "user_data"), "{}");
}

#[test]
fn read_cookie_missing_name_is_empty() {
    assert_eq!(read_cookie("theme=dark", "auth_token"), "");
    assert_eq!(read_cookie("", "auth_token"), "");
}

#[test]
fn read_cookie_does_not_match_name_prefix() {
    assert_eq!(read_cookie("auth_token_old=x", "auth_token"), "");
}

#[test]
fn read_cookie_last_duplicate_wins() {
    assert_eq!(read_cookie("a=1; a=2", "a"), "2");
}

#[test]
fn read_cookie_keeps_malformed_value_verbatim() {
    assert_eq!(read_cookie("user_data=%E0%A4%A", "user_data"), "%E0%A4%A");
}

// =============================================================
// MemoryCookies
// =============================================================

#[test]
fn set_then_get_round_trips_reserved_characters() {
    let cookies = MemoryCookies::new();
    for value in ["plain", "semi;colon", "com,ma", "eq=uals", "sp ace", r#"{"roles":["ROLE_USER"]}"#] {
        cookies.set_default("user_data", value);
        assert_eq!(cookies.get("user_data"), value, "round trip failed for {value:?}");
    }
}

#[test]
fn get_missing_cookie_is_empty() {
    assert_eq!(MemoryCookies::new().get("auth_token"), "");
}

#[test]
fn delete_removes_cookie() {
    let cookies = MemoryCookies::new();
    cookies.set_default("auth_token", "t1");
    cookies.delete("auth_token");
    assert_eq!(cookies.get("auth_token"), "");
    assert_eq!(cookies.document_cookie(), "");
}

#[test]
fn cookie_expires_after_ttl() {
    let cookies = MemoryCookies::new();
    cookies.set("auth_token", "t1", 7);
    cookies.advance(Duration::days(6));
    assert_eq!(cookies.get("auth_token"), "t1");
    cookies.advance(Duration::days(2));
    assert_eq!(cookies.get("auth_token"), "");
}

#[test]
fn past_expires_attribute_removes_cookie() {
    let cookies = MemoryCookies::new();
    cookies.apply("auth_token=t1; path=/");
    assert_eq!(cookies.get("auth_token"), "t1");
    cookies.apply("auth_token=stale; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/");
    assert_eq!(cookies.get("auth_token"), "");
}

#[test]
fn future_expires_attribute_sets_lifetime() {
    let cookies = MemoryCookies::new();
    cookies.apply("auth_token=t1; expires=Fri, 01 Jan 2100 00:00:00 GMT; path=/");
    cookies.advance(Duration::days(30));
    assert_eq!(cookies.get("auth_token"), "t1");
    cookies.advance(Duration::days(MAX_LIFETIME_DAYS));
    assert_eq!(cookies.get("auth_token"), "");
}

#[test]
fn max_age_takes_precedence_over_expires() {
    let cookies = MemoryCookies::new();
    cookies.apply("auth_token=t1; max-age=60; expires=Thu, 01 Jan 1970 00:00:00 GMT");
    assert_eq!(cookies.get("auth_token"), "t1");
}

#[test]
fn assignment_without_lifetime_uses_default_ttl() {
    let cookies = MemoryCookies::new();
    cookies.apply("auth_token=t1");
    cookies.advance(Duration::days(DEFAULT_TTL_DAYS - 1));
    assert_eq!(cookies.get("auth_token"), "t1");
    cookies.advance(Duration::days(2));
    assert_eq!(cookies.get("auth_token"), "");
}

#[test]
fn clones_share_the_same_jar() {
    let cookies = MemoryCookies::new();
    let other = cookies.clone();
    cookies.set_default("auth_token", "t1");
    assert_eq!(other.get("auth_token"), "t1");
}

#[test]
fn document_cookie_lists_live_cookies_encoded() {
    let cookies = MemoryCookies::new();
    cookies.set_default("a", "x y");
    cookies.set_default("b", "z");
    assert_eq!(cookies.document_cookie(), "a=x%20y; b=z");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_cookies_are_inert_outside_the_browser() {
    let cookies = BrowserCookies;
    cookies.set_default("auth_token", "t1");
    assert_eq!(cookies.get("auth_token"), "");
}
