use std::fs;

use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::{get_json, item_names, make_router, post_json, write_csv, PRODUCTS_CSV};

const SMALL_CSV: &str = "Name,Category\nSolo,Health\nOther,Travel\n";

#[tokio::test]
async fn reload_picks_up_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, PRODUCTS_CSV.as_bytes());
    let app = make_router(path.clone());

    let (_, body) = get_json(app.clone(), "/healthz").await;
    assert_eq!(body["rows"], 8);

    fs::write(&path, SMALL_CSV).unwrap();

    let (status, body) = post_json(app.clone(), "/reload", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rows"], 2);

    let (_, body) = post_json(app.clone(), "/recommend", json!({"categories": ["health"]})).await;
    assert_eq!(item_names(&body), ["Solo"]);
}

#[tokio::test]
async fn reload_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let app = make_router(write_csv(&dir, PRODUCTS_CSV.as_bytes()));

    for _ in 0..3 {
        let (status, body) = post_json(app.clone(), "/reload", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 8);
    }
}

#[tokio::test]
async fn failed_reload_keeps_serving_previous_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, PRODUCTS_CSV.as_bytes());
    let app = make_router(path.clone());

    let (_, before) = post_json(app.clone(), "/recommend", json!({"categories": ["health"]})).await;
    assert_eq!(before["count"], 5);

    fs::write(&path, "Name,Kind\nA,Health\n").unwrap();
    let (status, body) = post_json(app.clone(), "/reload", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["kind"], "load_bad_schema");
    assert_eq!(body["path"], path.display().to_string());

    fs::write(&path, "Name,Category\nA,Health,extra,fields\n").unwrap();
    let (status, body) = post_json(app.clone(), "/reload", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "load_unreadable");

    fs::remove_file(&path).unwrap();
    let (status, body) = post_json(app.clone(), "/reload", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "load_not_found");

    let (_, after) = post_json(app.clone(), "/recommend", json!({"categories": ["health"]})).await;
    assert_eq!(after, before);
}
