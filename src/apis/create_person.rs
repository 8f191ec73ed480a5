use super::validated::ValidatedJson;
use crate::{
  entity::{Person, PersonOut},
  log::*,
};
use axum::{http::StatusCode, Json};

#[utoipa::path(
  post,
  path = "/person/new",
  request_body = Person,
  responses(
    (status = 201, description = "Person accepted, echoed without its password", body = crate::entity::PersonBase),
    (status = 422, description = "Invalid person", body = crate::apis::validated::RejectionBody)
  ),
  tag = "persons"
)]
pub async fn create_person(ValidatedJson(person): ValidatedJson<Person>) -> (StatusCode, Json<PersonOut>) {
  debug!("Accepted a new person aged {}", person.age);
  (StatusCode::CREATED, Json(PersonOut::from(person)))
}
