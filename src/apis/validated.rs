use crate::{
  error::*,
  fields::{read_record, FromFields},
  log::*,
};
use axum::{
  async_trait,
  extract::{
    rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    FromRequest, FromRequestParts, Path, Query, Request,
  },
  http::{request::Parts, StatusCode},
  response::{IntoResponse, Response},
  Form, Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

const BODY: &str = "body";
const QUERY: &str = "query";
const PATH: &str = "path";
const FORM: &str = "form";

/// JSON body decoded and checked against its rule table
pub struct ValidatedJson<T>(pub T);
/// Urlencoded form decoded and checked against its rule table
pub struct ValidatedForm<T>(pub T);
/// Query string decoded and checked against its rule table
pub struct ValidatedQuery<T>(pub T);
/// Path parameters decoded and checked against their rule table
pub struct ValidatedPath<T>(pub T);

/// Body of a 422 answer
#[derive(Serialize, ToSchema)]
pub struct RejectionBody {
  detail: Vec<Violation>,
}

impl IntoResponse for RequestRejection {
  fn into_response(self) -> Response {
    debug!("Rejected request: {self}");
    let body = Json(RejectionBody {
      detail: self.violations().to_vec(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
  }
}

/// Query, path and form members all arrive as text
fn text_members(pairs: HashMap<String, String>) -> Value {
  Value::Object(pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect::<Map<_, _>>())
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
  T: FromFields,
  S: Send + Sync,
{
  type Rejection = RequestRejection;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|e| {
      let kind = match &e {
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "value_error",
      };
      RequestRejection::malformed(&[BODY], e.body_text(), kind)
    })?;
    read_record(BODY, &value, false).map(Self)
  }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
  T: FromFields,
  S: Send + Sync,
{
  type Rejection = RequestRejection;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Form(pairs) = Form::<HashMap<String, String>>::from_request(req, state)
      .await
      .map_err(|e| {
        let kind = match &e {
          FormRejection::InvalidFormContentType(_) => "content_type",
          _ => "value_error",
        };
        RequestRejection::malformed(&[FORM], e.body_text(), kind)
      })?;
    read_record(FORM, &text_members(pairs), true).map(Self)
  }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
  T: FromFields,
  S: Send + Sync,
{
  type Rejection = RequestRejection;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Query(pairs) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
      .await
      .map_err(|e: QueryRejection| RequestRejection::malformed(&[QUERY], e.body_text(), "value_error"))?;
    read_record(QUERY, &text_members(pairs), true).map(Self)
  }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
  T: FromFields,
  S: Send + Sync,
{
  type Rejection = RequestRejection;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(pairs) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
      .await
      .map_err(|e: PathRejection| RequestRejection::malformed(&[PATH], e.body_text(), "value_error"))?;
    read_record(PATH, &text_members(pairs), true).map(Self)
  }
}
