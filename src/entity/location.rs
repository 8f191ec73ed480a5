use crate::fields::{Fields, FromFields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum City {
  #[serde(rename = "buenos aires")]
  BuenosAires,
  #[serde(rename = "bogota")]
  Bogota,
}
impl City {
  pub fn as_str(&self) -> &'static str {
    match self {
      City::BuenosAires => "buenos aires",
      City::Bogota => "bogota",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum State {
  Cundinamarca,
  Caqueta,
}
impl State {
  pub fn as_str(&self) -> &'static str {
    match self {
      State::Cundinamarca => "cundinamarca",
      State::Caqueta => "caqueta",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Country {
  Colombia,
  Argentina,
}
impl Country {
  pub fn as_str(&self) -> &'static str {
    match self {
      Country::Colombia => "colombia",
      Country::Argentina => "argentina",
    }
  }
}

/// Where a person lives. Every field is optional and null when omitted,
/// but a given value must belong to its enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, ToSchema)]
#[schema(example = json!({"city": "bogota", "state": "cundinamarca", "country": "colombia"}))]
pub struct Location {
  pub city: Option<City>,
  pub state: Option<State>,
  pub country: Option<Country>,
}

impl FromFields for Location {
  fn from_fields(fields: &mut Fields<'_>) -> Self {
    Self {
      city: fields.nullable("city"),
      state: fields.nullable("state"),
      country: fields.nullable("country"),
    }
  }
}

impl Location {
  pub fn into_fields(self) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("city".to_string(), self.city.map(|v| v.as_str()).into());
    fields.insert("state".to_string(), self.state.map(|v| v.as_str()).into());
    fields.insert("country".to_string(), self.country.map(|v| v.as_str()).into());
    fields
  }
}
