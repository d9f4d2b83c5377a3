use axum::{http::StatusCode, routing::get, Json, Router};
use shared::{
    api::Talent,
    domain::{Position, TalentId, UserId},
};

use super::support::{logged_in_client, spawn_server};
use crate::store::{ClientStore, ResourceStore};

fn talent(id: i64, first_name: &str) -> Talent {
    Talent {
        id: TalentId(id),
        user_id: UserId(id + 100),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        age: 19,
        position: Position::Forward,
        team_id: None,
        matches_played: 10,
        goals: 3,
        assists: 1,
        clean_sheets: 0,
        photo_path: None,
        team_name: None,
        match_history_ids: None,
    }
}

#[test]
fn replace_upsert_remove_round_trip() {
    let mut store = ResourceStore::default();
    store.replace_all(vec![talent(1, "Ann"), talent(2, "Ben")]);
    assert_eq!(store.len(), 2);

    // Upsert replaces by id, appends unknown ids.
    store.upsert(talent(2, "Benjamin"));
    store.upsert(talent(3, "Cy"));
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(2).expect("talent 2").first_name, "Benjamin");

    store.remove(1);
    assert!(store.get(1).is_none());
    assert_eq!(store.all().len(), 2);
}

#[tokio::test]
async fn refresh_replaces_snapshot_on_success() {
    let app = Router::new().route(
        "/talents",
        get(|| async { Json(vec![talent(1, "Ann"), talent(2, "Ben")]) }),
    );
    let server_url = spawn_server(app).await;
    let client = logged_in_client(&server_url, shared::domain::Role::Scout).await;

    let mut store = ClientStore::default();
    store.talents.replace_all(vec![talent(9, "Stale")]);

    store.refresh_talents(&client).await.expect("refresh");
    assert_eq!(store.talents.len(), 2);
    assert!(store.talents.get(9).is_none());
    assert!(store.talents.last_error().is_none());
    assert!(!store.talents.is_loading());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot_and_records_error() {
    let app = Router::new().route(
        "/talents",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server_url = spawn_server(app).await;
    let client = logged_in_client(&server_url, shared::domain::Role::Scout).await;

    let mut store = ClientStore::default();
    store.talents.replace_all(vec![talent(9, "Stale")]);

    let result = store.refresh_talents(&client).await;
    assert!(result.is_err());
    assert_eq!(store.talents.len(), 1, "old snapshot must survive");
    assert!(store.talents.last_error().is_some());
    assert!(!store.talents.is_loading());
}
