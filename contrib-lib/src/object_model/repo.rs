use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Repo {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "contributors_url")]
    pub contributors_url: String,

    #[serde(rename = "watchers_count")]
    pub watchers_count: u64,
}
