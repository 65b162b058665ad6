/* src/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "INVALID_PROPS" => 400,
    "NOT_FOUND" => 404,
    "SCHEMA_ERROR" | "CONFIG_ERROR" | "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl BrickError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// A brick schema or one of its stories breaks its own declared constraints.
  pub fn schema(msg: impl Into<String>) -> Self {
    Self::with_code("SCHEMA_ERROR", msg)
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::with_code("CONFIG_ERROR", msg)
  }

  pub fn invalid_props(msg: impl Into<String>) -> Self {
    Self::with_code("INVALID_PROPS", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for BrickError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for BrickError {}

impl From<serde_json::Error> for BrickError {
  fn from(err: serde_json::Error) -> Self {
    Self::invalid_props(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("INVALID_PROPS"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("SCHEMA_ERROR"), 500);
    assert_eq!(default_status("CONFIG_ERROR"), 500);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn new_explicit_status() {
    let err = BrickError::new("GONE", "brick retired", 410);
    assert_eq!(err.code(), "GONE");
    assert_eq!(err.message(), "brick retired");
    assert_eq!(err.status(), 410);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(BrickError::schema("x").code(), "SCHEMA_ERROR");
    assert_eq!(BrickError::config("x").code(), "CONFIG_ERROR");
    assert_eq!(BrickError::invalid_props("x").status(), 400);
    assert_eq!(BrickError::not_found("x").status(), 404);
    assert_eq!(BrickError::internal("x").status(), 500);
  }

  #[test]
  fn json_error_maps_to_invalid_props() {
    let err: BrickError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert_eq!(err.code(), "INVALID_PROPS");
  }

  #[test]
  fn display_format() {
    let err = BrickError::not_found("missing");
    assert_eq!(err.to_string(), "NOT_FOUND: missing");
  }
}
