//! Integration tests for persistence across restarts.

use ocean_clean_core::Email;
use ocean_clean_integration_tests::{
    TEST_ADMIN_SECRET, browser, spawn_site, temp_data_dir, test_config,
};
use ocean_clean_site::storage::FileBlobStore;
use ocean_clean_site::store::SiteStore;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_state_survives_restart() {
    let data_dir = temp_data_dir();
    let client = browser();

    {
        let server = spawn_site(test_config(&data_dir, None)).await;

        client
            .post(server.url("/api/auth/signup"))
            .json(&json!({
                "name": "Kim",
                "email": "kim@x.com",
                "password": "pw1",
                "confirmPassword": "pw1"
            }))
            .send()
            .await
            .expect("signup request");
        client
            .post(server.url("/api/auth/login"))
            .json(&json!({"email": "kim@x.com", "password": "pw1"}))
            .send()
            .await
            .expect("login request");
        client
            .post(server.url("/api/admin/login"))
            .json(&json!({"secret": TEST_ADMIN_SECRET}))
            .send()
            .await
            .expect("admin login request");
        let resp = client
            .post(server.url("/api/admin/activities"))
            .json(&json!({"title": "Aewol sweep", "price": "10,000"}))
            .send()
            .await
            .expect("create request");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Reopen the same files directly
    let store = SiteStore::open(FileBlobStore::open(&data_dir).expect("open dir")).expect("open store");
    let email = Email::parse("kim@x.com").expect("valid email");
    assert!(store.find_user_by_email(&email).is_some());
    assert_eq!(store.session().map(|m| m.name.as_str()), Some("Kim"));
    assert_eq!(store.activities().len(), 1);

    // And through a restarted server
    let server = spawn_site(test_config(&data_dir, None)).await;
    let me: Value = browser()
        .get(server.url("/api/auth/me"))
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("json body");
    assert_eq!(me["user"]["email"], "kim@x.com");

    let _ = std::fs::remove_dir_all(&data_dir);
}

#[tokio::test]
async fn test_blob_files_use_camel_case_records() {
    let data_dir = temp_data_dir();
    let server = spawn_site(test_config(&data_dir, None)).await;

    browser()
        .post(server.url("/api/auth/signup"))
        .json(&json!({
            "name": "Kim",
            "email": "kim@x.com",
            "password": "pw1",
            "confirmPassword": "pw1"
        }))
        .send()
        .await
        .expect("signup request");

    let raw = std::fs::read_to_string(data_dir.join("oc_users.json")).expect("users blob");
    let users: Value = serde_json::from_str(&raw).expect("valid json");
    let users = users.as_array().expect("array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "kim@x.com");
    assert!(users[0]["joinedAt"].as_str().is_some());
    assert_ne!(users[0]["password"], "pw1");

    let _ = std::fs::remove_dir_all(&data_dir);
}

#[tokio::test]
async fn test_legacy_plaintext_roster_still_logs_in() {
    let data_dir = temp_data_dir();
    std::fs::create_dir_all(&data_dir).expect("create dir");
    std::fs::write(
        data_dir.join("oc_users.json"),
        r#"[{"id":"k3j9x0a1b","name":"Lee","email":"lee@x.com","password":"legacy"}]"#,
    )
    .expect("write users blob");

    let server = spawn_site(test_config(&data_dir, None)).await;
    let resp = browser()
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "lee@x.com", "password": "legacy"}))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::OK);

    let member: Value = resp.json().await.expect("json body");
    assert_eq!(member["rank"], "ROOKIE");
    assert_eq!(member["contribution"], "0kg");
    assert_eq!(member["joinedAt"], "2024.01.01");

    let _ = std::fs::remove_dir_all(&data_dir);
}
