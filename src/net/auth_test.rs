use futures::executor::block_on;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::transport::Method;
use crate::state::session::{StoredSession, USER_COOKIE, read_session};
use crate::util::testing::MemoryCookies;

fn credentials() -> LoginRequest {
    LoginRequest { username: "a@b.com/".to_owned(), password: "x".to_owned() }
}

fn service(transport: ScriptedTransport) -> AuthService<ScriptedTransport, MemoryCookies> {
    AuthService::new(transport, MemoryCookies::new())
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_session_and_signs_requests() {
    let auth = service(ScriptedTransport::new().reply(200, r#"{"token":"t1","roles":["ROLE_USER"]}"#));

    let session = block_on(auth.login(&credentials())).unwrap();

    assert_eq!(session.token, "t1");
    assert_eq!(session.user.roles, vec!["ROLE_USER".to_owned()]);
    assert_eq!(auth.auth_header(), Some("Bearer t1".to_owned()));
    assert!(matches!(read_session(auth.cookies()), StoredSession::Valid(_)));
}

#[test]
fn login_posts_credentials_without_auth_header() {
    let auth = service(ScriptedTransport::new().reply(200, r#"{"token":"t1","roles":["ROLE_USER"]}"#));
    block_on(auth.login(&credentials())).unwrap();

    let requests = auth.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, LOGIN_ENDPOINT);
    assert_eq!(requests[0].authorization, None);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({ "username": "a@b.com/", "password": "x" }))
    );
}

#[test]
fn login_stores_entire_response_body_as_user_data() {
    let body = r#"{"token":"t1","type":"Bearer","id":4,"username":"a@b.com","roles":["ROLE_ADMIN"]}"#;
    let auth = service(ScriptedTransport::new().reply(200, body));
    block_on(auth.login(&credentials())).unwrap();

    let stored: serde_json::Value = serde_json::from_str(&auth.cookies().get(USER_COOKIE)).unwrap();
    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(stored, expected);
}

#[test]
fn login_rejected_reports_backend_message_and_stores_nothing() {
    let auth = service(ScriptedTransport::new().reply(401, r#"{"message":"Bad credentials"}"#));

    let err = block_on(auth.login(&credentials())).unwrap_err();

    assert_eq!(err, AuthError::Rejected { status: 401, message: "Bad credentials".to_owned() });
    assert_eq!(err.to_string(), "Bad credentials");
    assert_eq!(auth.auth_header(), None);
    assert_eq!(auth.cookies().document_cookie(), "");
}

#[test]
fn login_network_failure_is_an_error_not_a_panic() {
    let auth = service(ScriptedTransport::new().fail(TransportError::Network("connection refused".to_owned())));

    let err = block_on(auth.login(&credentials())).unwrap_err();

    assert_eq!(err.to_string(), "network error: connection refused");
    assert_eq!(auth.auth_header(), None);
}

#[test]
fn login_without_token_is_rejected() {
    let auth = service(ScriptedTransport::new().reply(200, r#"{"roles":["ROLE_USER"]}"#));
    assert_eq!(block_on(auth.login(&credentials())), Err(AuthError::MissingToken));
    assert_eq!(auth.cookies().document_cookie(), "");
}

#[test]
fn login_with_non_json_body_is_a_decode_error() {
    let auth = service(ScriptedTransport::new().reply(200, "<html>"));
    assert!(matches!(block_on(auth.login(&credentials())), Err(AuthError::Decode(_))));
    assert_eq!(auth.auth_header(), None);
}

#[test]
fn two_failed_logins_leave_no_token() {
    let auth = service(
        ScriptedTransport::new()
            .reply(401, r#"{"message":"Bad credentials"}"#)
            .fail(TransportError::Network("timeout".to_owned())),
    );

    assert!(block_on(auth.login(&credentials())).is_err());
    assert!(block_on(auth.login(&credentials())).is_err());

    assert_eq!(auth.cookies().get(TOKEN_COOKIE), "");
    assert_eq!(read_session(auth.cookies()), StoredSession::Absent);
}

// =============================================================
// register
// =============================================================

fn registration() -> RegisterRequest {
    RegisterRequest {
        customer_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret123".to_owned(),
        phone: "5551234567".to_owned(),
        date_of_birth: "1990-04-01".to_owned(),
    }
}

#[test]
fn register_returns_plain_text_reply_as_string() {
    let auth = service(ScriptedTransport::new().reply(200, "User registered successfully!"));
    let data = block_on(auth.register(&registration())).unwrap();
    assert_eq!(data, serde_json::Value::String("User registered successfully!".to_owned()));
    assert_eq!(auth.auth_header(), None);
}

#[test]
fn register_returns_json_reply() {
    let auth = service(ScriptedTransport::new().reply(201, r#"{"custId":9}"#));
    let data = block_on(auth.register(&registration())).unwrap();
    assert_eq!(data, serde_json::json!({ "custId": 9 }));
    assert_eq!(auth.transport().requests()[0].path, REGISTER_ENDPOINT);
}

#[test]
fn register_failure_extracts_backend_message() {
    let auth = service(ScriptedTransport::new().reply(400, r#"{"message":"Email is already taken!"}"#));
    let err = block_on(auth.register(&registration())).unwrap_err();
    assert_eq!(err.to_string(), "Email is already taken!");
}

#[test]
fn register_failure_without_message_uses_status() {
    let auth = service(ScriptedTransport::new().reply(500, ""));
    let err = block_on(auth.register(&registration())).unwrap_err();
    assert_eq!(err.to_string(), "request failed with status code 500");
}

// =============================================================
// logout / auth_header
// =============================================================

#[test]
fn auth_header_is_none_without_token() {
    assert_eq!(service(ScriptedTransport::new()).auth_header(), None);
}

#[test]
fn logout_then_auth_header_is_none() {
    let auth = service(ScriptedTransport::new().reply(200, r#"{"token":"t1","roles":["ROLE_USER"]}"#));
    block_on(auth.login(&credentials())).unwrap();

    auth.logout();

    assert_eq!(auth.auth_header(), None);
    assert_eq!(read_session(auth.cookies()), StoredSession::Absent);
    assert!(auth.transport().requests().len() == 1, "logout must not call the backend");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}
