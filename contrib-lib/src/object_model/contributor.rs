use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Contributor {
    #[serde(rename = "contributions")]
    pub contributions: u64,

    /// API URL of the contributor's user profile.
    #[serde(rename = "url")]
    pub url: String,
}
