//! Only the handful of fields the lookup needs are modelled. GitHub sends
//! far more; serde skips whatever is not named here, and any field GitHub
//! leaves out decodes to its zero value.

mod api_error_body;
mod api_root;
mod contributor;
mod organization;
mod repo;
mod user;

pub use self::api_error_body::ApiErrorBody;
pub use self::api_root::{expand_org_template, ApiRoot, ORG_PLACEHOLDER};
pub use self::contributor::Contributor;
pub use self::organization::Organization;
pub use self::repo::Repo;
pub use self::user::User;

use serde::{Deserialize, Deserializer};

/// GitHub sends `null` for unset profile fields; treat it like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
