use super::{request::PersonDetailQuery, validated::ValidatedQuery};
use crate::log::*;
use axum::Json;
use serde_json::{Map, Value};

/// Echoes the query back as `{name: age}`. No lookup is performed.
#[utoipa::path(
  get,
  path = "/person/detail",
  params(PersonDetailQuery),
  responses(
    (status = 200, description = "Name mapped to age"),
    (status = 422, description = "Invalid query", body = crate::apis::validated::RejectionBody)
  ),
  tag = "persons"
)]
pub async fn person_detail(ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>) -> Json<Map<String, Value>> {
  debug!("person_detail invoked");
  // absent name is keyed as null, the way a null key is written in JSON
  let key = query.name.unwrap_or_else(|| "null".to_string());
  let mut body = Map::new();
  body.insert(key, Value::String(query.age));
  Json(body)
}
