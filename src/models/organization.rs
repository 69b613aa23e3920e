use serde::{Deserialize, Serialize};

use super::IssueConnection;

/// Immutable snapshot of the organization as the server returned it. Never
/// patched field by field; the state layer replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub repository: Repository,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub stargazers: StargazerCount,
    pub viewer_has_starred: bool,
    pub issues: IssueConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargazerCount {
    pub total_count: i64,
}

/// Organization header without the repository subtree, as returned by the
/// name-and-url-only query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub name: String,
    pub url: String,
}
