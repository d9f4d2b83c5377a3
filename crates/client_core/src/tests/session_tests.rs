use std::sync::Arc;

use shared::domain::Role;

use super::support::{credentials, mint_token};
use crate::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, ScoutingClient,
};

#[tokio::test]
async fn restore_accepts_valid_persisted_credentials() {
    let token = mint_token("user@example.com", 9, &["ROLE_SCOUT"]);
    let store = Arc::new(MemoryCredentialStore::default());
    store
        .save(&credentials("user@example.com", 9, Role::Scout, token))
        .await
        .expect("seed");

    let client = ScoutingClient::new("http://127.0.0.1:1", store);
    let user = client
        .restore_session()
        .await
        .expect("restore")
        .expect("session");
    assert_eq!(user.email, "user@example.com");
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn restore_discards_malformed_token_and_clears_store() {
    let store = Arc::new(MemoryCredentialStore::default());
    store
        .save(&credentials(
            "user@example.com",
            9,
            Role::Talent,
            "two.segments".into(),
        ))
        .await
        .expect("seed");

    let client = ScoutingClient::new("http://127.0.0.1:1", store.clone());
    assert!(client.restore_session().await.expect("restore").is_none());
    assert!(!client.is_authenticated().await);
    assert!(store.load().await.expect("load").is_none());
}

#[tokio::test]
async fn restore_with_empty_store_is_logged_out() {
    let store = Arc::new(MemoryCredentialStore::default());
    let client = ScoutingClient::new("http://127.0.0.1:1", store);
    assert!(client.restore_session().await.expect("restore").is_none());
}

#[tokio::test]
async fn file_store_round_trips_credentials() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("credentials.json");
    let store = FileCredentialStore::new(&path);

    assert!(store.load().await.expect("empty load").is_none());

    let token = mint_token("user@example.com", 9, &["ROLE_TALENT"]);
    let saved = credentials("user@example.com", 9, Role::Talent, token);
    store.save(&saved).await.expect("save");
    assert!(path.exists());

    let loaded = store.load().await.expect("load").expect("credentials");
    assert_eq!(loaded, saved);

    store.clear().await.expect("clear");
    assert!(!path.exists());
    assert!(store.load().await.expect("load after clear").is_none());

    // Clearing an already-empty store is not an error.
    store.clear().await.expect("second clear");
}

#[tokio::test]
async fn corrupt_credentials_file_starts_logged_out() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("credentials.json");
    tokio::fs::write(&path, b"{ not json").await.expect("write");

    let store = Arc::new(FileCredentialStore::new(&path));
    let client = ScoutingClient::new("http://127.0.0.1:1", store.clone());
    assert!(client.restore_session().await.expect("restore").is_none());

    // The unreadable file was dropped so the next run starts clean.
    assert!(!path.exists());
}
