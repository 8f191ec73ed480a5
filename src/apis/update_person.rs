use super::{
  request::{PersonIdPath, UpdatePersonRequest},
  validated::{ValidatedJson, ValidatedPath},
};
use crate::{entity::PersonOut, error::*, log::*};
use axum::Json;
use serde_json::{Map, Value};

/// Merges the person and the location into a single mapping.
/// Location fields win over same-named person fields. The password is never echoed.
#[utoipa::path(
  put,
  path = "/person/{person_id}",
  params(PersonIdPath),
  request_body = UpdatePersonRequest,
  responses(
    (status = 200, description = "Person merged with its location"),
    (status = 422, description = "Invalid person id, person or location", body = crate::apis::validated::RejectionBody)
  ),
  tag = "persons"
)]
pub async fn update_person(
  path: Result<ValidatedPath<PersonIdPath>, RequestRejection>,
  request: Result<ValidatedJson<UpdatePersonRequest>, RequestRejection>,
) -> Result<Json<Map<String, Value>>, RequestRejection> {
  let (ValidatedPath(path), ValidatedJson(request)) = match (path, request) {
    (Ok(path), Ok(request)) => (path, request),
    (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e),
    (Err(path_error), Err(body_error)) => return Err(path_error.combine(body_error)),
  };

  debug!("Updating person {}", path.person_id);
  let mut merged = PersonOut::from(request.person).into_fields();
  merged.extend(request.location.into_fields());
  Ok(Json(merged))
}
