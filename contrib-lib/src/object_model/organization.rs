use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Organization {
    #[serde(rename = "repos_url")]
    pub repos_url: String,
}
