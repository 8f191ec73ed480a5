use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ImageResponse {
  #[serde(rename = "Filename")]
  pub filename: Option<String>,
  #[serde(rename = "Format")]
  pub format: Option<String>,
  #[serde(rename = "Size(kb)")]
  pub size_kb: f64,
}

impl ImageResponse {
  /// Byte length expressed in kilobytes, rounded to 2 decimal places with ties to even
  pub fn size_in_kb(byte_len: usize) -> f64 {
    (byte_len as f64 / 1024.0 * 100.0).round_ties_even() / 100.0
  }
}
