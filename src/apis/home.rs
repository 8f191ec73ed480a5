use crate::log::*;
use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
  get,
  path = "/",
  responses((status = 200, description = "Greeting")),
  tag = "home"
)]
pub async fn home() -> Json<Value> {
  debug!("home invoked");
  Json(json!({ "Hello": "World" }))
}
