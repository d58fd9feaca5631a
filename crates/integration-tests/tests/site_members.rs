//! Integration tests for member signup, login, and the site session.

use ocean_clean_integration_tests::{browser, spawn_default_site};
use reqwest::StatusCode;
use serde_json::{Value, json};

fn kim_signup() -> Value {
    json!({
        "name": "Kim",
        "email": "kim@x.com",
        "password": "pw1",
        "confirmPassword": "pw1"
    })
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_signup_returns_profile_without_password() {
    let server = spawn_default_site().await;
    let client = browser();

    let resp = client
        .post(server.url("/api/auth/signup"))
        .json(&kim_signup())
        .send()
        .await
        .expect("signup request");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let member: Value = resp.json().await.expect("json body");
    assert_eq!(member["name"], "Kim");
    assert_eq!(member["rank"], "ROOKIE");
    assert_eq!(member["contribution"], "0kg");
    assert!(member.get("password").is_none());
    assert!(member["joinedAt"].as_str().is_some());

    // Signup alone does not log in
    let me: Value = client
        .get(server.url("/api/auth/me"))
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("json body");
    assert!(me["user"].is_null());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let server = spawn_default_site().await;
    let client = browser();

    client
        .post(server.url("/api/auth/signup"))
        .json(&kim_signup())
        .send()
        .await
        .expect("signup request");

    let resp = client
        .post(server.url("/api/auth/signup"))
        .json(&kim_signup())
        .send()
        .await
        .expect("signup request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = resp.json().await.expect("json body");
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let server = spawn_default_site().await;
    let client = browser();

    let mismatch = json!({
        "name": "Kim",
        "email": "kim@x.com",
        "password": "pw1",
        "confirmPassword": "pw2"
    });
    let resp = client
        .post(server.url("/api/auth/signup"))
        .json(&mismatch)
        .send()
        .await
        .expect("signup request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let missing_name = json!({
        "name": "",
        "email": "kim@x.com",
        "password": "pw1",
        "confirmPassword": "pw1"
    });
    let resp = client
        .post(server.url("/api/auth/signup"))
        .json(&missing_name)
        .send()
        .await
        .expect("signup request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Login / Logout
// ============================================================================

#[tokio::test]
async fn test_login_logout_flow() {
    let server = spawn_default_site().await;
    let client = browser();

    client
        .post(server.url("/api/auth/signup"))
        .json(&kim_signup())
        .send()
        .await
        .expect("signup request");

    let resp = client
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "kim@x.com", "password": "wrong"}))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "kim@x.com", "password": "pw1"}))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::OK);

    let me: Value = client
        .get(server.url("/api/auth/me"))
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("json body");
    assert_eq!(me["user"]["name"], "Kim");

    let resp = client
        .post(server.url("/api/auth/logout"))
        .send()
        .await
        .expect("logout request");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let me: Value = client
        .get(server.url("/api/auth/me"))
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("json body");
    assert!(me["user"].is_null());
}

#[tokio::test]
async fn test_session_is_site_wide() {
    let server = spawn_default_site().await;

    browser()
        .post(server.url("/api/auth/signup"))
        .json(&kim_signup())
        .send()
        .await
        .expect("signup request");
    browser()
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "kim@x.com", "password": "pw1"}))
        .send()
        .await
        .expect("login request");

    // A different client without cookies sees the same member
    let me: Value = browser()
        .get(server.url("/api/auth/me"))
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("json body");
    assert_eq!(me["user"]["email"], "kim@x.com");
}
