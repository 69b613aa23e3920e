use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::constants::{
    ADD_STAR, GET_ISSUES_OF_REPOSITORY, GET_ORGANIZATION, GITHUB_API_URL, REMOVE_STAR,
};
use crate::error::{GitHubError, GitHubResult};
use crate::models::{
    AddStarData, GraphQLResponse, OrganizationProfile, QueryData, RemoveStarData, Starrable,
};

/// HTTP client for the GitHub GraphQL endpoint. The bearer token is baked
/// into the default headers at construction and never reloaded; without a
/// token requests go out unauthenticated and the server's complaint comes
/// back through the normal error channel.
pub struct GitHubClient {
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(access_token: Option<String>) -> GitHubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("gh-issues-cli"));

        if let Some(token) = access_token {
            let value = HeaderValue::from_str(&format!("bearer {}", token)).map_err(|_| {
                GitHubError::InvalidInput("access token contains invalid header characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// One POST round trip. Returns the raw `{data, errors}` envelope without
    /// interpreting it; non-2xx responses and network failures are errors.
    async fn execute_query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> GitHubResult<GraphQLResponse<T>> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self.client.post(GITHUB_API_URL).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::ApiError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch one page of open issues for an `organization/repository` path.
    ///
    /// The path is split on the first `/`; a missing repository segment is
    /// sent as `null` and surfaces as a server-side error in the envelope,
    /// the same way an unknown organization does. `cursor` is `None` for the
    /// first page and the previous page's `endCursor` afterwards.
    pub async fn fetch_issue_page(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> GitHubResult<GraphQLResponse<QueryData>> {
        let (organization, repository) = split_path(path);

        let variables = json!({
            "organization": organization,
            "repository": repository,
            "cursor": cursor,
        });

        self.execute_query(GET_ISSUES_OF_REPOSITORY, Some(variables))
            .await
    }

    /// Fetch name and url of an organization. Used to verify credentials.
    pub async fn fetch_organization(&self, login: &str) -> GitHubResult<OrganizationProfile> {
        #[derive(serde::Deserialize)]
        struct OrganizationOnlyData {
            organization: Option<OrganizationProfile>,
        }

        let variables = json!({ "organization": login });
        let response: GraphQLResponse<OrganizationOnlyData> =
            self.execute_query(GET_ORGANIZATION, Some(variables)).await?;
        let data = unwrap_envelope(response)?;
        data.organization
            .ok_or_else(|| GitHubError::GraphQLError(format!("organization '{}' not found", login)))
    }

    pub async fn add_star(&self, repository_id: &str) -> GitHubResult<Starrable> {
        let variables = json!({ "repositoryId": repository_id });
        let response: GraphQLResponse<AddStarData> =
            self.execute_query(ADD_STAR, Some(variables)).await?;
        let data = unwrap_envelope(response)?;
        Ok(data.add_star.starrable)
    }

    pub async fn remove_star(&self, repository_id: &str) -> GitHubResult<Starrable> {
        let variables = json!({ "repositoryId": repository_id });
        let response: GraphQLResponse<RemoveStarData> =
            self.execute_query(REMOVE_STAR, Some(variables)).await?;
        let data = unwrap_envelope(response)?;
        Ok(data.remove_star.starrable)
    }
}

/// Collapse an envelope into its data, turning GraphQL errors into a single
/// joined message. Mutations go through this; the issues query does not,
/// because its errors belong in the view state.
fn unwrap_envelope<T>(response: GraphQLResponse<T>) -> GitHubResult<T> {
    if let Some(errors) = response.errors {
        let messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
        return Err(GitHubError::GraphQLError(messages.join(", ")));
    }

    response
        .data
        .ok_or_else(|| GitHubError::GraphQLError("no data returned".to_string()))
}

fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('/') {
        Some((organization, repository)) => (organization, Some(repository)),
        None => (path, None),
    }
}
