pub use anyhow::{bail, Result};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// One violated constraint, located by the path of the offending field like `["body", "person", "age"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
  pub loc: Vec<String>,
  pub msg: String,
  #[serde(rename = "type")]
  pub kind: String,
}

impl Violation {
  pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
    Self {
      loc: loc.iter().map(|s| s.to_string()).collect(),
      msg: msg.into(),
      kind: kind.into(),
    }
  }
}

/// Describes why a request was rejected before reaching its handler
#[derive(Debug, Error)]
pub enum RequestRejection {
  #[error("Failed to decode request: {}", .0.msg)]
  Malformed(Violation),
  #[error("Request violates {} field constraint(s)", .0.len())]
  Invalid(Vec<Violation>),
}

impl RequestRejection {
  pub fn malformed(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
    Self::Malformed(Violation::new(loc, msg, kind))
  }

  /// Rejection listing every given violation, ordered by location
  pub fn invalid(mut violations: Vec<Violation>) -> Self {
    violations.sort_by(|a, b| a.loc.cmp(&b.loc).then_with(|| a.kind.cmp(&b.kind)));
    Self::Invalid(violations)
  }

  /// Joins the rejections of two parts of the same request
  pub fn combine(self, other: Self) -> Self {
    let mut violations = self.into_violations();
    violations.extend(other.into_violations());
    Self::invalid(violations)
  }

  pub fn violations(&self) -> &[Violation] {
    match self {
      Self::Malformed(v) => std::slice::from_ref(v),
      Self::Invalid(v) => v,
    }
  }

  fn into_violations(self) -> Vec<Violation> {
    match self {
      Self::Malformed(v) => vec![v],
      Self::Invalid(v) => v,
    }
  }
}

/// Flattens every violated rule, nested records included, under the given location prefix.
pub fn rule_violations(loc: &[String], errors: &ValidationErrors) -> Vec<Violation> {
  let mut prefix = loc.to_vec();
  let mut violations = vec![];
  collect_violations(&mut prefix, errors, &mut violations);
  violations
}

fn collect_violations(prefix: &mut Vec<String>, errors: &ValidationErrors, out: &mut Vec<Violation>) {
  for (field, kind) in errors.errors() {
    prefix.push(field.to_string());
    match kind {
      ValidationErrorsKind::Field(field_errors) => {
        out.extend(field_errors.iter().map(|e| Violation {
          loc: prefix.clone(),
          msg: describe(e),
          kind: e.code.to_string(),
        }));
      }
      ValidationErrorsKind::Struct(inner) => collect_violations(prefix, inner, out),
      ValidationErrorsKind::List(items) => {
        for (idx, inner) in items {
          prefix.push(idx.to_string());
          collect_violations(prefix, inner, out);
          prefix.pop();
        }
      }
    }
    prefix.pop();
  }
}

/// Human readable message of a single violated rule
fn describe(error: &ValidationError) -> String {
  if let Some(message) = &error.message {
    return message.to_string();
  }
  let param = |name: &str| error.params.get(name).map(|v| v.to_string());

  match error.code.as_ref() {
    "length" => match (param("min"), param("max")) {
      (Some(min), Some(max)) => format!("ensure this value has between {min} and {max} characters"),
      (Some(min), None) => format!("ensure this value has at least {min} characters"),
      (None, Some(max)) => format!("ensure this value has at most {max} characters"),
      (None, None) => "ensure this value has a valid length".to_string(),
    },
    "range" => {
      let bounds = [
        ("exclusive_min", "greater than"),
        ("min", "greater than or equal to"),
        ("exclusive_max", "less than"),
        ("max", "less than or equal to"),
      ]
      .iter()
      .filter_map(|(name, phrase)| param(name).map(|v| format!("{phrase} {v}")))
      .collect::<Vec<_>>();
      if bounds.is_empty() {
        "ensure this value is within range".to_string()
      } else {
        format!("ensure this value is {}", bounds.join(" and "))
      }
    }
    "email" => "value is not a valid email address".to_string(),
    code => format!("value failed the `{code}` check"),
  }
}
