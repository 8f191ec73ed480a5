use crate::error::{rule_violations, RequestRejection, Violation};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

/// A record read member by member out of one request part
pub trait FromFields: Validate + Sized {
  /// Reads every declared member. A member that cannot be read is recorded in `fields`
  /// and left at a placeholder, so that the remaining members are still read and checked.
  fn from_fields(fields: &mut Fields<'_>) -> Self;
}

/// Cursor over the members of one object, collecting the members that could not be read
pub struct Fields<'a> {
  members: &'a Map<String, Value>,
  loc: Vec<String>,
  /// Members arrive as text (query, path, form) and may need parsing into numbers or booleans
  textual: bool,
  violations: Vec<Violation>,
}

impl<'a> Fields<'a> {
  fn new(members: &'a Map<String, Value>, loc: Vec<String>, textual: bool) -> Self {
    Self {
      members,
      loc,
      textual,
      violations: vec![],
    }
  }

  /// Required member, `T::default()` as placeholder when absent or unreadable
  pub fn required<T: DeserializeOwned + Default>(&mut self, name: &str) -> T {
    let members = self.members;
    match members.get(name) {
      Some(value) => self.read(name, value).unwrap_or_default(),
      None => {
        self.reject(name, "field required", "missing");
        T::default()
      }
    }
  }

  /// Optional member. `default` when absent, `None` when explicitly null.
  pub fn optional<T: DeserializeOwned>(&mut self, name: &str, default: Option<T>) -> Option<T> {
    let members = self.members;
    match members.get(name) {
      None => default,
      Some(Value::Null) => None,
      Some(value) => self.read(name, value),
    }
  }

  /// Optional member that is null unless given
  pub fn nullable<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
    self.optional(name, None)
  }

  /// Required member holding a record of its own, located under this member's name
  pub fn nested<T: FromFields + Default>(&mut self, name: &str) -> T {
    let members = self.members;
    match members.get(name) {
      Some(Value::Object(inner_members)) => {
        let mut inner = Fields::new(inner_members, self.loc_of(name), self.textual);
        let record = T::from_fields(&mut inner);
        self.violations.append(&mut inner.violations);
        record
      }
      Some(_) => {
        self.reject(name, "value is not a valid object", "type_error");
        T::default()
      }
      None => {
        self.reject(name, "field required", "missing");
        T::default()
      }
    }
  }

  fn read<T: DeserializeOwned>(&mut self, name: &str, value: &Value) -> Option<T> {
    let decoded = match (serde_json::from_value::<T>(value.clone()), value) {
      (Err(e), Value::String(text)) if self.textual => serde_json::from_str::<T>(text).map_err(|_| e),
      (decoded, _) => decoded,
    };
    match decoded {
      Ok(v) => Some(v),
      Err(e) => {
        self.reject(name, e.to_string(), "type_error");
        None
      }
    }
  }

  fn loc_of(&self, name: &str) -> Vec<String> {
    let mut loc = self.loc.clone();
    loc.push(name.to_string());
    loc
  }

  fn reject(&mut self, name: &str, msg: impl Into<String>, kind: &str) {
    self.violations.push(Violation {
      loc: self.loc_of(name),
      msg: msg.into(),
      kind: kind.to_string(),
    });
  }
}

/// Reads a record out of a decoded request part and checks it against its rule table.
/// Unreadable members and violated rules are reported together in a single rejection.
pub fn read_record<T: FromFields>(part: &str, value: &Value, textual: bool) -> Result<T, RequestRejection> {
  let Value::Object(members) = value else {
    return Err(RequestRejection::malformed(&[part], "value is not a valid object", "type_error"));
  };
  let mut fields = Fields::new(members, vec![part.to_string()], textual);
  let record = T::from_fields(&mut fields);
  let mut violations = fields.violations;

  if let Err(errors) = record.validate() {
    // rules failing on a placeholder are already reported as unreadable
    let unreadable = violations.iter().map(|v| v.loc.clone()).collect::<Vec<_>>();
    violations.extend(
      rule_violations(&[part.to_string()], &errors)
        .into_iter()
        .filter(|v| !unreadable.iter().any(|loc| v.loc.starts_with(loc))),
    );
  }

  if violations.is_empty() {
    Ok(record)
  } else {
    Err(RequestRejection::invalid(violations))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[derive(Debug, Default, Validate)]
  struct Inner {
    #[validate(range(min = 1, max = 10))]
    rank: i64,
    label: Option<String>,
  }
  impl FromFields for Inner {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
      Self {
        rank: fields.required("rank"),
        label: fields.optional("label", Some("none".to_string())),
      }
    }
  }

  #[derive(Debug, Default, Validate)]
  struct Outer {
    #[validate(length(min = 1))]
    name: String,
    flag: Option<bool>,
    #[validate(nested)]
    inner: Inner,
  }
  impl FromFields for Outer {
    fn from_fields(fields: &mut Fields<'_>) -> Self {
      Self {
        name: fields.required("name"),
        flag: fields.nullable("flag"),
        inner: fields.nested("inner"),
      }
    }
  }

  fn locs(rejection: &RequestRejection) -> Vec<(String, String)> {
    rejection
      .violations()
      .iter()
      .map(|v| (v.loc.join("."), v.kind.clone()))
      .collect()
  }

  #[test]
  fn defaults_apply_only_when_absent() {
    let outer: Outer = read_record("body", &json!({"name": "x", "inner": {"rank": 3}}), false).unwrap();
    assert_eq!(outer.inner.label.as_deref(), Some("none"));
    assert_eq!(outer.flag, None);

    let outer: Outer = read_record("body", &json!({"name": "x", "inner": {"rank": 3, "label": null}}), false).unwrap();
    assert_eq!(outer.inner.label, None);
  }

  #[test]
  fn unreadable_members_and_rule_violations_are_reported_together() {
    let rejection = read_record::<Outer>("body", &json!({"name": "", "flag": "yes", "inner": {}}), false).unwrap_err();
    assert_eq!(
      locs(&rejection),
      vec![
        ("body.flag".to_string(), "type_error".to_string()),
        ("body.inner.rank".to_string(), "missing".to_string()),
        ("body.name".to_string(), "length".to_string()),
      ]
    );
  }

  #[test]
  fn placeholders_are_not_reported_twice() {
    // the placeholder rank of 0 would break the range rule
    let rejection = read_record::<Outer>("body", &json!({"name": "x", "inner": {"rank": "high"}}), false).unwrap_err();
    assert_eq!(locs(&rejection), vec![("body.inner.rank".to_string(), "type_error".to_string())]);

    let rejection = read_record::<Outer>("body", &json!({"name": "x", "inner": 7}), false).unwrap_err();
    assert_eq!(locs(&rejection), vec![("body.inner".to_string(), "type_error".to_string())]);
  }

  #[test]
  fn textual_members_are_parsed() {
    let value = json!({"name": "x", "flag": "true", "inner": {"rank": "4"}});
    let outer: Outer = read_record("query", &value, true).unwrap();
    assert_eq!(outer.flag, Some(true));
    assert_eq!(outer.inner.rank, 4);

    // json values are taken as they are
    assert!(read_record::<Outer>("body", &value, false).is_err());
  }

  #[test]
  fn non_object_part_is_malformed() {
    let rejection = read_record::<Outer>("body", &json!([1, 2]), false).unwrap_err();
    assert!(matches!(rejection, RequestRejection::Malformed(_)));
    assert_eq!(locs(&rejection), vec![("body".to_string(), "type_error".to_string())]);
  }
}
