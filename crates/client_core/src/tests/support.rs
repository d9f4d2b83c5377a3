use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use shared::{
    api::UserAccount,
    domain::{Role, UserId},
};
use tokio::net::TcpListener;

use crate::{CredentialStore, Credentials, MemoryCredentialStore, ScoutingClient};

// Fixed far-future expiry so minted tokens never age out mid-test.
const TEST_EXP: i64 = 4102444800;

#[derive(Serialize)]
struct Authority {
    authority: String,
}

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    #[serde(rename = "userId")]
    user_id: i64,
    roles: Vec<Authority>,
    exp: i64,
}

/// Mints a real HS256 token the way the service's auth layer would.
pub fn mint_token(email: &str, user_id: i64, authorities: &[&str]) -> String {
    let claims = Claims {
        sub: email,
        user_id,
        roles: authorities
            .iter()
            .map(|authority| Authority {
                authority: (*authority).to_string(),
            })
            .collect(),
        exp: TEST_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("mint token")
}

pub fn credentials(email: &str, user_id: i64, role: Role, token: String) -> Credentials {
    Credentials {
        token,
        user_role: role,
        user: UserAccount {
            id: UserId(user_id),
            email: email.to_string(),
            user_type: role,
            talent_id: None,
            scout_id: None,
        },
    }
}

/// Serves the router on an ephemeral port and returns its base url.
pub async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Builds a client against `server_url` with a persisted, restored login.
pub async fn logged_in_client(server_url: &str, role: Role) -> Arc<ScoutingClient> {
    let authority = format!("ROLE_{}", role.as_str());
    let token = mint_token("user@example.com", 7, &[&authority]);
    let store = Arc::new(MemoryCredentialStore::default());
    store
        .save(&credentials("user@example.com", 7, role, token))
        .await
        .expect("seed credentials");
    let client = ScoutingClient::new(server_url, store);
    client
        .restore_session()
        .await
        .expect("restore")
        .expect("seeded session");
    client
}
