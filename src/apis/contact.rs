use super::{request::ContactForm, validated::ValidatedForm};
use crate::{constants::ADS_COOKIE_NAME, log::*};
use axum::{
  http::{header, HeaderMap},
  Json,
};

fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers
    .get_all(header::COOKIE)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(';'))
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(k, _)| *k == name)
    .map(|(_, v)| v)
}

/// Returns the user agent of the sender, or null if none was sent.
#[utoipa::path(
  post,
  path = "/contact",
  request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
  params(
    ("User-Agent" = Option<String>, Header, description = "Echoed back as it was sent"),
    ("ads" = Option<String>, Cookie, description = "Advertising campaign")
  ),
  responses(
    (status = 200, description = "User agent of the sender, or null", body = String),
    (status = 422, description = "Invalid form", body = crate::apis::validated::RejectionBody)
  ),
  tag = "contact"
)]
pub async fn contact(headers: HeaderMap, ValidatedForm(form): ValidatedForm<ContactForm>) -> Json<Option<String>> {
  // non-ASCII bytes are kept as far as they decode
  let user_agent = headers
    .get(header::USER_AGENT)
    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
  let ads = find_cookie(&headers, ADS_COOKIE_NAME);
  debug!(
    "Contact message of {} chars received (ads cookie: {:?})",
    form.message.chars().count(),
    ads
  );
  Json(user_agent)
}
