#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use recommender::libs::http::{router, AppState};
use recommender::libs::source::CsvSource;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PRODUCTS_CSV: &str = "\
Name,Category,Price
An Tâm,Bảo hiểm sức khỏe toàn diện,100
MediCare,Medical Plus,200
Phượt,Du lịch quốc tế,50
An Toàn,Tai nạn cá nhân,30
Nụ Cười,Nha khoa thẩm mỹ,70
Khỏe Mạnh,Sức khỏe gia đình,120
Viện Phí,Viện phí nội trú,90
Healthy,Healthcare,80
";

pub fn write_csv(dir: &TempDir, contents: &[u8]) -> PathBuf {
    let path = dir.path().join("products.csv");
    fs::write(&path, contents).unwrap();
    path
}

pub fn make_router(path: PathBuf) -> Router {
    router(AppState::new(CsvSource::new(path)))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).unwrap())
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, text) = post_raw(app, uri, body.to_string()).await;
    (status, serde_json::from_str(&text).unwrap())
}

pub fn item_names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["Name"].as_str().unwrap().to_string())
        .collect()
}
