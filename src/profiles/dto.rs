use serde::Deserialize;
use serde_json::Value;

use crate::reference::types::Gender;

/// Form input as typed by the user. Every field is loosely typed so that a
/// bad shape ends up as a validation failure instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// A JSON number or numeric text.
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub gender: Option<Gender>,
}
