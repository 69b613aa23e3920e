use std::sync::Arc;

use crate::client::GitHubClient;
use crate::error::{GitHubError, GitHubResult};
use crate::logging::log_debug;

use super::reconciler::{
    resolve_add_star_mutation, resolve_issues_query, resolve_remove_star_mutation,
};
use super::ViewState;

/// Owns the single [`ViewState`] and drives it through the reconciler in
/// response to fetches and star toggles.
///
/// Every round trip is awaited before the next one is issued, so two
/// in-flight requests can never race each other's state merge and no
/// stale-response guard is needed.
pub struct IssueBrowser {
    client: Arc<GitHubClient>,
    state: ViewState,
}

impl IssueBrowser {
    pub fn new(client: Arc<GitHubClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            state: ViewState::new(path),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Change the `organization/repository` text without fetching. The next
    /// [`fetch`](Self::fetch) starts over from page one.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.state.path = path.into();
    }

    /// Fetch the first issue page for the current path, discarding any
    /// previously accumulated pages.
    pub async fn fetch(&mut self) -> GitHubResult<&ViewState> {
        let raw = self.client.fetch_issue_page(&self.state.path, None).await?;
        self.state = resolve_issues_query(raw, None, &self.state);
        Ok(&self.state)
    }

    /// Fetch the next issue page and append it to the accumulated edges.
    pub async fn fetch_more(&mut self) -> GitHubResult<&ViewState> {
        let cursor = self.state.end_cursor().map(String::from).ok_or_else(|| {
            GitHubError::StateError(
                "no pagination cursor; fetch the first page before asking for more".to_string(),
            )
        })?;

        let raw = self
            .client
            .fetch_issue_page(&self.state.path, Some(&cursor))
            .await?;
        self.state = resolve_issues_query(raw, Some(&cursor), &self.state);
        Ok(&self.state)
    }

    /// Star or unstar the loaded repository, picking the mutation from the
    /// current `viewerHasStarred` flag.
    pub async fn toggle_star(&mut self) -> GitHubResult<&ViewState> {
        let repository = self
            .state
            .organization
            .as_ref()
            .map(|o| &o.repository)
            .ok_or_else(|| {
                GitHubError::StateError("no repository loaded; fetch issues first".to_string())
            })?;

        let repository_id = repository.id.clone();

        if repository.viewer_has_starred {
            let outcome = self.client.remove_star(&repository_id).await?;
            log_debug(&format!(
                "removeStar echoed viewerHasStarred={}",
                outcome.viewer_has_starred
            ));
            self.state = resolve_remove_star_mutation(&outcome, &self.state);
        } else {
            let outcome = self.client.add_star(&repository_id).await?;
            log_debug(&format!(
                "addStar echoed viewerHasStarred={}",
                outcome.viewer_has_starred
            ));
            self.state = resolve_add_star_mutation(&outcome, &self.state);
        }

        Ok(&self.state)
    }
}
