use serde::Serialize;

use crate::libs::dataset::RowView;

#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub status: &'static str,
    pub rows: usize,
    pub path: String,
}

#[derive(Serialize)]
pub struct RecommendResponse<'a> {
    pub status: &'static str,
    pub count: usize,
    pub items: Vec<RowView<'a>>,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub kind: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
