use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

/// Result of a login attempt. Only the username is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate, ToSchema)]
pub struct LoginOut {
  #[validate(length(max = 20))]
  #[schema(example = "cristian", max_length = 20)]
  pub username: String,
}
