use fake::Fake;
use fake::faker::phone_number::en::PhoneNumber;
use reclaim_adapters::{Argon2PasswordHasher, HashMapUserStore, VecItemStore};
use reclaim_service::ReclaimService;
use uuid::Uuid;

/// A service instance bound to an ephemeral port, backed by the in-memory
/// stores so every test starts from a clean slate.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let item_store = VecItemStore::new();
        let password_hasher = Argon2PasswordHasher::new();

        let service = ReclaimService::new(user_store, password_hasher, item_store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind an ephemeral port");
        let address = format!(
            "http://{}",
            listener
                .local_addr()
                .expect("Failed to read the bound address")
        );

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_register(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_user(&self, username: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/auth/user/{}", &self.address, username))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Posts the multipart report form; `image` is omitted entirely when None,
    /// matching a client that attached no file.
    pub async fn post_item(
        &self,
        request: &serde_json::Value,
        image: Option<Vec<u8>>,
    ) -> reqwest::Response {
        let mut form = reqwest::multipart::Form::new().part(
            "request",
            reqwest::multipart::Part::text(request.to_string())
                .mime_str("application/json")
                .expect("Failed to build the request part"),
        );
        if let Some(bytes) = image {
            form = form.part(
                "imageFile",
                reqwest::multipart::Part::bytes(bytes).file_name("upload.jpg"),
            );
        }

        self.http_client
            .post(format!("{}/api/items", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_items(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/items", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_items_by_owner(&self, user_id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/items/user/{}", &self.address, user_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn random_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub fn random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub fn random_contact_number() -> String {
    PhoneNumber().fake()
}

pub fn register_body(username: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
        "contactInfo": random_contact_number(),
    })
}

pub fn item_request(email: &str) -> serde_json::Value {
    item_request_titled("Lost Wallet", email)
}

pub fn item_request_titled(title: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Black leather wallet with ID cards",
        "category": "ACCESSORIES",
        "type": "LOST",
        "location": "Library",
        "date": "2025-03-14",
        "user": { "email": email },
    })
}
