use axum::Json;
use serde_json::{json, Value};

pub const WELCOME_MESSAGE: &str = "Welcome to the Newsletter RESTful API";

pub async fn index() -> Json<Value> {
    Json(json!({ "index": WELCOME_MESSAGE }))
}
