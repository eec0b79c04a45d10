use std::sync::Arc;

use account_service::domain::account::authenticator::RequestAuthenticator;
use account_service::domain::account::service::AccountRegistry;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountRepository;
use credentials::HashingConfig;
use credentials::PasswordHasher;
use credentials::TokenCodec;
use credentials::TokenConfig;
use serde_json::json;
use serde_json::Value;

pub const TEST_PASSWORD: &str = "MyPass456";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryAccountRepository>,
    pub token_codec: TokenCodec,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryAccountRepository::new());

        // Cheap hashing parameters keep the suite fast
        let password_hasher = PasswordHasher::new(&HashingConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");

        let token_codec = TokenCodec::new(&TokenConfig {
            secret: "test-secret-key-for-token-signing-32-bytes".to_string(),
            validity_minutes: 30,
        });

        let account_service = Arc::new(AccountRegistry::new(
            Arc::clone(&repository),
            password_hasher,
            token_codec.clone(),
        ));
        let authenticator = Arc::new(RequestAuthenticator::new(
            Arc::clone(&account_service),
            token_codec.clone(),
        ));

        let router = create_router(account_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            token_codec,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register an account with the default test password and return the
    /// parsed response body
    pub async fn register_account(&self, username: &str, email: &str) -> Value {
        let response = self
            .post("/api/accounts")
            .json(&json!({
                "first_name": "Alice",
                "last_name": "Smith",
                "email": email,
                "username": username,
                "password": TEST_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to execute register request");

        assert_eq!(response.status().as_u16(), 201);

        response
            .json()
            .await
            .expect("Failed to parse register response")
    }

    /// Register an account and log in, returning (account id, access token)
    pub async fn register_and_login(&self, username: &str, email: &str) -> (String, String) {
        let body = self.register_account(username, email).await;
        let account_id = body["data"]["id"]
            .as_str()
            .expect("Missing account id")
            .to_string();

        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "identifier": username,
                "password": TEST_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to execute login request");

        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response
            .json()
            .await
            .expect("Failed to parse login response");
        let token = body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string();

        (account_id, token)
    }
}
