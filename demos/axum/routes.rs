use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::cors::AppState;

pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "CORS policy demo",
        "version": env!("CARGO_PKG_VERSION"),
        "config": state.config.as_ref(),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
