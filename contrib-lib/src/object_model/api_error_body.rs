use serde::{Deserialize, Serialize};

/// Body GitHub sends alongside 4xx and 5xx responses.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "message")]
    pub message: String,
}
