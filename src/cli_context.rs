use std::sync::Arc;

use crate::client::GitHubClient;
use crate::config::get_access_token;
use crate::error::GitHubResult;

/// Central context for CLI operations, holding the access token and a shared
/// client instance. The token is read once; commands that can run
/// unauthenticated fall back to a token-less client.
pub struct CliContext {
    access_token: Option<String>,
    client: Option<Arc<GitHubClient>>,
}

impl CliContext {
    /// Load context from the environment and saved configuration.
    pub fn load() -> Self {
        Self {
            access_token: get_access_token().ok(),
            client: None,
        }
    }

    /// Get or create the shared client. Built without a token when none is
    /// configured; GitHub then answers with an authorization error that
    /// surfaces through the normal error channel instead of failing fast.
    pub fn client(&mut self) -> GitHubResult<Arc<GitHubClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(GitHubClient::new(self.access_token.clone())?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}
