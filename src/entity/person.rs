use crate::fields::{Fields, FromFields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
  White,
  Black,
  Brown,
  Red,
  Blonde,
}
impl HairColor {
  pub fn as_str(&self) -> &'static str {
    match self {
      HairColor::White => "white",
      HairColor::Black => "black",
      HairColor::Brown => "brown",
      HairColor::Red => "red",
      HairColor::Blonde => "blonde",
    }
  }
}

fn default_hair_color() -> Option<HairColor> {
  Some(HairColor::White)
}

/// Declares a person record: the shared name, age, hair color and marital status members
/// with their rules, followed by the record's own members and the [`Fields`] reader of each.
macro_rules! person_record {
  (
    $(#[$($meta:tt)*])*
    pub struct $name:ident {
      $(
        $(#[$($field_meta:tt)*])*
        pub $field:ident: $ty:ty => $read:ident,
      )*
    }
  ) => {
    #[derive(Debug, Clone, Default, Validate, ToSchema)]
    $(#[$($meta)*])*
    pub struct $name {
      #[validate(length(min = 1, max = 50))]
      #[schema(min_length = 1, max_length = 50)]
      pub first_name: String,
      #[validate(length(min = 1, max = 50))]
      #[schema(min_length = 1, max_length = 50)]
      pub last_name: String,
      #[validate(range(exclusive_min = 0, max = 100))]
      #[schema(minimum = 1, maximum = 100)]
      pub age: i64,
      pub hair_color: Option<HairColor>,
      pub is_married: Option<bool>,
      $(
        $(#[$($field_meta)*])*
        pub $field: $ty,
      )*
    }

    impl FromFields for $name {
      fn from_fields(fields: &mut Fields<'_>) -> Self {
        Self {
          first_name: fields.required("first_name"),
          last_name: fields.required("last_name"),
          age: fields.required("age"),
          hair_color: fields.optional("hair_color", default_hair_color()),
          is_married: fields.nullable("is_married"),
          $($field: fields.$read(stringify!($field)),)*
        }
      }
    }
  };
}

/// Moves the shared members of each record into a [`PersonOut`], leaving the rest behind
macro_rules! into_person_out {
  ($($name:ident),*) => {
    $(
      impl From<$name> for PersonOut {
        fn from(person: $name) -> Self {
          Self {
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            hair_color: person.hair_color,
            is_married: person.is_married,
          }
        }
      }
    )*
  };
}

person_record! {
  /// Fields shared by every person shape. Never carries a password.
  #[derive(PartialEq, Eq, Serialize)]
  #[schema(example = json!({
    "first_name": "Cristian",
    "last_name": "Cortes Mondragon",
    "age": 21,
    "hair_color": "blonde",
    "is_married": true
  }))]
  pub struct PersonBase {}
}

/// Output shape of a person
pub type PersonOut = PersonBase;

impl PersonBase {
  pub fn into_fields(self) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("first_name".to_string(), self.first_name.into());
    fields.insert("last_name".to_string(), self.last_name.into());
    fields.insert("age".to_string(), self.age.into());
    fields.insert("hair_color".to_string(), self.hair_color.map(|v| v.as_str()).into());
    fields.insert("is_married".to_string(), self.is_married.into());
    fields
  }
}

person_record! {
  /// Input shape of a person, i.e., [`PersonBase`] plus a password.
  pub struct Person {
    #[validate(length(min = 8))]
    #[schema(min_length = 8, format = Password)]
    pub password: String => required,
  }
}

person_record! {
  /// Person as sent to the update endpoint. Same rules as [`Person`], but the password may be left out.
  pub struct PersonUpdate {
    #[validate(length(min = 8))]
    #[schema(min_length = 8, format = Password)]
    pub password: Option<String> => nullable,
  }
}

into_person_out!(Person, PersonUpdate);
