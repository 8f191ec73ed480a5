use crate::{
  entity::{Location, PersonUpdate},
  fields::{Fields, FromFields},
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailQuery {
  /// This is the person name. It is between 1 and 50 characters
  #[validate(length(min = 1, max = 50))]
  #[param(min_length = 1, max_length = 50, example = "Andrea")]
  pub name: Option<String>,
  /// This is the person age. It is required
  #[param(example = "42")]
  pub age: String,
}
impl FromFields for PersonDetailQuery {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      name: fields.nullable("name"),
      age: fields.required("age"),
    }
  }
}

#[derive(Debug, Clone, Copy, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
  /// This is the person's id. It is required and must be greater than 0
  #[validate(range(exclusive_min = 0))]
  #[param(minimum = 1, example = 45)]
  pub person_id: i64,
}
impl FromFields for PersonIdPath {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      person_id: fields.required("person_id"),
    }
  }
}

#[derive(Debug, Clone, Validate, ToSchema)]
pub struct UpdatePersonRequest {
  #[validate(nested)]
  pub person: PersonUpdate,
  #[validate(nested)]
  pub location: Location,
}
impl FromFields for UpdatePersonRequest {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      person: fields.nested("person"),
      location: fields.nested("location"),
    }
  }
}

#[derive(Debug, Clone, Validate, ToSchema)]
pub struct LoginForm {
  #[validate(length(max = 20))]
  #[schema(example = "cristian", max_length = 20)]
  pub username: String,
  /// Required, never checked
  #[allow(dead_code)]
  #[schema(format = Password)]
  pub password: String,
}
impl FromFields for LoginForm {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      username: fields.required("username"),
      password: fields.required("password"),
    }
  }
}

#[derive(Debug, Clone, Validate, ToSchema)]
pub struct ContactForm {
  #[validate(length(min = 1, max = 20))]
  #[schema(min_length = 1, max_length = 20)]
  pub first_name: String,
  #[validate(length(min = 1, max = 20))]
  #[schema(min_length = 1, max_length = 20)]
  pub last_name: String,
  #[validate(email)]
  #[schema(example = "ana@example.com")]
  pub email: String,
  #[validate(length(min = 20))]
  #[schema(min_length = 20)]
  pub message: String,
}
impl FromFields for ContactForm {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      first_name: fields.required("first_name"),
      last_name: fields.required("last_name"),
      email: fields.required("email"),
      message: fields.required("message"),
    }
  }
}
