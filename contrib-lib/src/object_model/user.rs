use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct User {
    /// Display name. Empty when the user has not set one.
    #[serde(rename = "name", deserialize_with = "super::null_as_default")]
    pub name: String,

    #[serde(rename = "login")]
    pub login: String,
}
