use super::{request::LoginForm, validated::ValidatedForm};
use crate::{entity::LoginOut, log::*};
use axum::Json;

/// The password is accepted but never checked against anything.
#[utoipa::path(
  post,
  path = "/login",
  request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
  responses(
    (status = 200, description = "Login accepted", body = LoginOut),
    (status = 422, description = "Invalid form", body = crate::apis::validated::RejectionBody)
  ),
  tag = "persons"
)]
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
  debug!("Login attempt by {}", form.username);
  Json(LoginOut { username: form.username })
}
