use super::{request::PersonIdPath, validated::ValidatedPath};
use crate::{
  constants::{PERSON_EXISTS_MESSAGE, PERSON_NOT_FOUND_DETAIL},
  log::*,
  state::AppState,
};
use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

#[derive(Debug)]
pub enum ShowPersonError {
  NoSuchPerson,
  LookupFailed,
}
impl IntoResponse for ShowPersonError {
  fn into_response(self) -> Response {
    let (status, error_message) = match self {
      ShowPersonError::NoSuchPerson => (StatusCode::NOT_FOUND, PERSON_NOT_FOUND_DETAIL),
      ShowPersonError::LookupFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Person lookup failed"),
    };
    let body = Json(json!({
        "detail": error_message,
    }));
    (status, body).into_response()
  }
}

#[utoipa::path(
  get,
  path = "/person/detail/{person_id}",
  params(PersonIdPath),
  responses(
    (status = 200, description = "The person is known"),
    (status = 404, description = "The person is unknown"),
    (status = 422, description = "Invalid person id", body = crate::apis::validated::RejectionBody)
  ),
  tag = "persons"
)]
pub async fn show_person(
  State(state): State<Arc<AppState>>,
  ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> Result<Json<Map<String, Value>>, ShowPersonError> {
  let person_id = path.person_id;

  let exists = match state.person_table.exists(person_id).await {
    Ok(exists) => exists,
    Err(e) => {
      error!("Failed to look up person {person_id}: {e}");
      return Err(ShowPersonError::LookupFailed);
    }
  };
  if !exists {
    debug!("Person {person_id} is not in the directory");
    return Err(ShowPersonError::NoSuchPerson);
  }

  let mut body = Map::new();
  body.insert(person_id.to_string(), PERSON_EXISTS_MESSAGE.into());
  Ok(Json(body))
}
