use serde_json::{Map, Value};

use crate::libs::dataset::Limit;

/// Body of `POST /recommend`, read leniently: anything malformed is treated as absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendRequest {
    pub categories: Vec<String>,
    pub limit: Limit,
}

impl RecommendRequest {
    pub fn from_body(body: &[u8]) -> RecommendRequest {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => RecommendRequest::from_object(&object),
            _ => RecommendRequest::default(),
        }
    }

    pub fn from_object(object: &Map<String, Value>) -> RecommendRequest {
        let categories = match object.get("categories") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        };

        RecommendRequest {
            categories,
            limit: Limit::parse(object.get("limit")),
        }
    }
}
