use reclaim_adapters::http::routes::ErrorResponse;
use serde_json::json;

use crate::helpers::{TestApp, random_email, random_username, register_body};

#[tokio::test]
async fn register_returns_201_and_a_confirmation_message() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&register_body(&random_username(), &random_email(), "pw123"))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body");
    assert_eq!(body["message"], "User registered successfully!");
}

#[tokio::test]
async fn register_rejects_a_duplicate_username() {
    let app = TestApp::new().await;
    let username = random_username();

    let first = app
        .post_register(&register_body(&username, &random_email(), "pw123"))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_register(&register_body(&username, &random_email(), "pw123"))
        .await;
    assert_eq!(second.status().as_u16(), 409);

    let error = second
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "Username already exists!");
}

#[tokio::test]
async fn register_rejects_a_duplicate_email() {
    let app = TestApp::new().await;
    let email = random_email();

    let first = app
        .post_register(&register_body(&random_username(), &email, "pw123"))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_register(&register_body(&random_username(), &email, "pw123"))
        .await;
    assert_eq!(second.status().as_u16(), 409);

    let error = second
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "Email already in use!");
}

#[tokio::test]
async fn register_rejects_an_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&register_body(&random_username(), "not-an-email", "pw123"))
        .await;

    assert_eq!(response.status().as_u16(), 400);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert!(error.starts_with("Invalid input:"), "got: {error}");
}

#[tokio::test]
async fn register_returns_422_when_a_field_is_missing() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "username": random_username(),
            "email": random_email(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
