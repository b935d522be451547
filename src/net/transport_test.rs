use super::*;

#[test]
fn json_attaches_serialized_body() {
    let request = ApiRequest::post("/api/auth/login")
        .json(&serde_json::json!({ "username": "a@b.com" }))
        .unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(serde_json::json!({ "username": "a@b.com" })));
    assert_eq!(request.authorization, None);
}

#[test]
fn authorized_sets_header_value() {
    let request = ApiRequest::get("/api/user/accounts").authorized(Some("Bearer t1".to_owned()));
    assert_eq!(request.authorization.as_deref(), Some("Bearer t1"));
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(ApiResponse::new(200, "").is_success());
    assert!(ApiResponse::new(204, "").is_success());
    assert!(!ApiResponse::new(199, "").is_success());
    assert!(!ApiResponse::new(302, "").is_success());
    assert!(!ApiResponse::new(401, "").is_success());
}

#[test]
fn error_message_prefers_backend_message() {
    let resp = ApiResponse::new(400, r#"{"message":"Email already in use"}"#);
    assert_eq!(resp.error_message(), "Email already in use");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(ApiResponse::new(500, "boom").error_message(), "request failed with status code 500");
    assert_eq!(ApiResponse::new(401, r#"{"message":"  "}"#).error_message(), "request failed with status code 401");
    assert_eq!(ApiResponse::new(403, r#"{"error":"x"}"#).error_message(), "request failed with status code 403");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_browser() {
    let transport = BrowserTransport::default();
    let result = futures::executor::block_on(transport.send(ApiRequest::get("/api/user/accounts")));
    assert_eq!(result, Err(TransportError::Unavailable));
}
