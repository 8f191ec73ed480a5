use super::{
  contact, create_person, health_check, home, login, person_detail, post_image,
  request::{ContactForm, LoginForm, UpdatePersonRequest},
  response::ImageResponse,
  show_person, update_person,
  validated::RejectionBody,
};
use crate::{
  entity::{City, Country, HairColor, Location, LoginOut, Person, PersonBase, PersonUpdate, State},
  error::Violation,
  log::*,
};
use axum::Json;
use utoipa::OpenApi;

/// Schema document of the service
#[derive(OpenApi)]
#[openapi(
  info(title = "person-api", description = "Validates person and location records"),
  paths(
    home::home,
    health_check::health_check,
    create_person::create_person,
    person_detail::person_detail,
    show_person::show_person,
    update_person::update_person,
    login::login,
    contact::contact,
    post_image::post_image,
  ),
  components(schemas(
    City,
    State,
    Country,
    HairColor,
    Location,
    PersonBase,
    Person,
    PersonUpdate,
    UpdatePersonRequest,
    LoginForm,
    LoginOut,
    ContactForm,
    ImageResponse,
    Violation,
    RejectionBody,
  )),
  tags(
    (name = "home", description = "Liveness"),
    (name = "persons", description = "Person records"),
    (name = "contact", description = "Contact form"),
    (name = "images", description = "Image upload"),
  )
)]
pub struct ApiDoc;

pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
  debug!("openapi_document invoked");
  Json(ApiDoc::openapi())
}
