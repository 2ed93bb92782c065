use serde::Deserialize;

use crate::errors::ApiError;

/// Query parameters accepted by the `/people` operations. Each handler
/// decides which of them it actually requires.
#[derive(Debug, Default, Deserialize)]
pub struct PeopleParams {
    pub name: Option<String>,
    pub location: Option<String>,
    pub age: Option<String>,
}

impl PeopleParams {
    /// Required `name` value; an empty value counts as missing.
    pub fn name(&self) -> Result<String, ApiError> {
        required(&self.name, "name")
    }

    /// Required `location` value; an empty value counts as missing.
    pub fn location(&self) -> Result<String, ApiError> {
        required(&self.location, "location")
    }

    /// Required `age` value; an empty value counts as missing. Kept as text,
    /// never parsed as a number.
    pub fn age(&self) -> Result<String, ApiError> {
        required(&self.age, "age")
    }
}

fn required(value: &Option<String>, param: &'static str) -> Result<String, ApiError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::MissingParameter(param)),
    }
}
