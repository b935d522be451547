use super::*;

#[test]
fn with_base_strips_trailing_slashes() {
    let config = ApiConfig::with_base("https://bank.example.com//");
    assert_eq!(config.base_url, "https://bank.example.com");
}

#[test]
fn with_base_falls_back_to_default_when_blank() {
    assert_eq!(ApiConfig::with_base("   ").base_url, DEFAULT_API_BASE);
}

#[test]
fn url_joins_base_and_path() {
    let config = ApiConfig::with_base("http://localhost:8080");
    assert_eq!(config.url("/api/auth/login"), "http://localhost:8080/api/auth/login");
}
