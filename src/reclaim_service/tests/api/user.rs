use reclaim_adapters::http::routes::ErrorResponse;

use crate::helpers::{TestApp, random_email, random_username, register_body};

#[tokio::test]
async fn fetching_a_registered_user_returns_its_profile() {
    let app = TestApp::new().await;
    let username = random_username();
    let email = random_email();

    app.post_register(&register_body(&username, &email, "pw123"))
        .await;

    let response = app.get_user(&username).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body");
    assert_eq!(body["username"], username);
    assert_eq!(body["email"], email);
    assert!(body["id"].is_string());

    let object = body.as_object().expect("expected a JSON object");
    assert!(!object.contains_key("passwordHash"));
    assert!(!object.contains_key("password_hash"));
    assert!(!object.contains_key("contactInfo"));
}

#[tokio::test]
async fn fetching_an_unknown_user_returns_404() {
    let app = TestApp::new().await;

    let response = app.get_user("ghost").await;

    assert_eq!(response.status().as_u16(), 404);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "User not found");
}
