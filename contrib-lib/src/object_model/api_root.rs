use serde::{Deserialize, Serialize};

pub const ORG_PLACEHOLDER: &str = "{org}";

/// Discovery document served at the API root.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ApiRoot {
    #[serde(rename = "organization_url")]
    pub organization_url: String,
}

impl ApiRoot {
    pub fn organization_url_for(&self, organization: &str) -> String {
        expand_org_template(&self.organization_url, organization)
    }
}

/// Replaces the first `{org}` in `template`. Any later occurrence is left
/// as is.
pub fn expand_org_template(template: &str, organization: &str) -> String {
    template.replacen(ORG_PLACEHOLDER, organization, 1)
}
