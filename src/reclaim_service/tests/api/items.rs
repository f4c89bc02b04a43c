use reclaim_adapters::http::routes::ErrorResponse;
use serde_json::json;

use crate::helpers::{
    TestApp, item_request, item_request_titled, random_email, random_username, register_body,
};

#[tokio::test]
async fn creating_an_item_echoes_the_report_with_its_owner() {
    let app = TestApp::new().await;
    let username = random_username();
    let email = random_email();
    app.post_register(&register_body(&username, &email, "pw123"))
        .await;

    let response = app
        .post_item(&item_request(&email), Some(b"fake image bytes".to_vec()))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body");
    assert_eq!(body["title"], "Lost Wallet");
    assert_eq!(body["description"], "Black leather wallet with ID cards");
    assert_eq!(body["category"], "ACCESSORIES");
    assert_eq!(body["type"], "LOST");
    assert_eq!(body["location"], "Library");
    assert_eq!(body["user"]["username"], username);

    // The listing projection never exposes the stored image or the owner's
    // contact details.
    let object = body.as_object().expect("expected a JSON object");
    assert!(!object.contains_key("image"));
    assert!(!object.contains_key("id"));
    let owner = body["user"].as_object().expect("expected a JSON object");
    assert!(!owner.contains_key("email"));
}

#[tokio::test]
async fn creating_an_item_without_an_image_is_accepted() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_register(&register_body(&random_username(), &email, "pw123"))
        .await;

    let response = app.post_item(&item_request(&email), None).await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn creating_an_item_for_an_unknown_owner_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_item(&item_request("nobody@example.com"), None)
        .await;

    assert_eq!(response.status().as_u16(), 422);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert_eq!(error, "Owner not found");
}

#[tokio::test]
async fn creating_an_item_with_an_unknown_category_is_rejected() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_register(&register_body(&random_username(), &email, "pw123"))
        .await;

    let request = json!({
        "title": "Lost Wallet",
        "description": "Black leather wallet with ID cards",
        "category": "GADGETS",
        "type": "LOST",
        "location": "Library",
        "date": "2025-03-14",
        "user": { "email": email },
    });

    let response = app.post_item(&request, None).await;

    assert_eq!(response.status().as_u16(), 400);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert!(
        error.contains("Invalid item category: GADGETS"),
        "got: {error}"
    );
}

#[tokio::test]
async fn creating_an_item_without_the_request_part_is_rejected() {
    let app = TestApp::new().await;

    let form = reqwest::multipart::Form::new().part(
        "imageFile",
        reqwest::multipart::Part::bytes(b"orphan image".to_vec()).file_name("upload.jpg"),
    );
    let response = app
        .http_client
        .post(format!("{}/api/items", &app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);

    let error = response
        .json::<ErrorResponse>()
        .await
        .expect("Failed to parse the response body")
        .error;
    assert!(error.contains("missing multipart part"), "got: {error}");
}

#[tokio::test]
async fn an_empty_store_lists_no_items() {
    let app = TestApp::new().await;

    let response = app.get_items().await;

    assert_eq!(response.status().as_u16(), 200);

    let items: Vec<serde_json::Value> = response
        .json()
        .await
        .expect("Failed to parse the response body");
    assert!(items.is_empty());
}

#[tokio::test]
async fn listing_returns_items_in_creation_order() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_register(&register_body(&random_username(), &email, "pw123"))
        .await;

    for title in ["Umbrella", "Student ID", "Charger"] {
        let response = app
            .post_item(&item_request_titled(title, &email), None)
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let items: Vec<serde_json::Value> = app
        .get_items()
        .await
        .json()
        .await
        .expect("Failed to parse the response body");

    let titles: Vec<&str> = items
        .iter()
        .map(|item| item["title"].as_str().expect("expected a string title"))
        .collect();
    assert_eq!(titles, ["Umbrella", "Student ID", "Charger"]);
}

#[tokio::test]
async fn listing_by_owner_filters_other_users_items() {
    let app = TestApp::new().await;

    let first_username = random_username();
    let first_email = random_email();
    app.post_register(&register_body(&first_username, &first_email, "pw123"))
        .await;

    let second_email = random_email();
    app.post_register(&register_body(&random_username(), &second_email, "pw123"))
        .await;

    app.post_item(&item_request_titled("Wallet", &first_email), None)
        .await;
    app.post_item(&item_request_titled("Keys", &second_email), None)
        .await;
    app.post_item(&item_request_titled("Bag", &first_email), None)
        .await;

    let login: serde_json::Value = app
        .post_login(&json!({ "username": first_username, "password": "pw123" }))
        .await
        .json()
        .await
        .expect("Failed to parse the response body");
    let first_id = login["user"]["id"].as_str().expect("expected a user id");

    let items: Vec<serde_json::Value> = app
        .get_items_by_owner(first_id)
        .await
        .json()
        .await
        .expect("Failed to parse the response body");

    let titles: Vec<&str> = items
        .iter()
        .map(|item| item["title"].as_str().expect("expected a string title"))
        .collect();
    assert_eq!(titles, ["Wallet", "Bag"]);
}
