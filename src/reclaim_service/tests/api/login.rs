use reclaim_adapters::http::routes::ErrorResponse;
use serde_json::json;

use crate::helpers::{TestApp, random_email, random_username, register_body};

#[tokio::test]
async fn login_returns_the_authenticated_user() {
    let app = TestApp::new().await;
    let username = random_username();
    let email = random_email();

    app.post_register(&register_body(&username, &email, "password123"))
        .await;

    let response = app
        .post_login(&json!({ "username": username, "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body");
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["user"]["username"], username);
    assert_eq!(body["user"]["email"], email);
    assert!(body["user"]["id"].is_string());
}

#[tokio::test]
async fn login_rejects_blank_credentials() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "username": "", "password": "" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "Username and password must not be empty");
}

#[tokio::test]
async fn login_rejects_an_unknown_username() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "username": "ghost", "password": "pw123" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "User not found");
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = TestApp::new().await;
    let username = random_username();

    app.post_register(&register_body(&username, &random_email(), "password123"))
        .await;

    let response = app
        .post_login(&json!({ "username": username, "password": "wrongPass" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "Invalid credentials");
}
