use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::get_default_path;
use crate::error::{ErrorContext, GitHubError};
use crate::formatting::star_toggle_label;
use crate::state::IssueBrowser;

/// Toggle the viewer's star on a repository: a starred repository is
/// unstarred and vice versa, mirroring a single star-button click.
pub async fn handle_star(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    if !context.has_token() {
        return Err(Box::new(GitHubError::TokenNotFound));
    }
    let client = context.client().context("Failed to build GitHub client")?;

    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(get_default_path);

    let mut browser = IssueBrowser::new(client, path.clone());
    browser.fetch().await?;

    if let Some(summary) = browser.state().error_summary() {
        return Err(Box::new(GitHubError::GraphQLError(summary)));
    }

    browser.toggle_star().await?;

    let state = browser.state();
    let repository = &state
        .organization
        .as_ref()
        .ok_or_else(|| GitHubError::StateError("repository disappeared from state".to_string()))?
        .repository;

    let verb = if repository.viewer_has_starred {
        "Starred".green()
    } else {
        "Unstarred".yellow()
    };
    println!(
        "{} {} (⭐ {}, next action: {})",
        verb,
        path,
        repository.stargazers.total_count,
        star_toggle_label(repository)
    );

    Ok(())
}
