use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::get_default_path;
use crate::error::ErrorContext;
use crate::formatting::print_view_state;
use crate::logging::log_info;
use crate::state::IssueBrowser;

pub async fn handle_issues(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    let client = context.client().context("Failed to build GitHub client")?;

    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(get_default_path);
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");
    let all = matches.get_flag("all");

    log_info(&format!("Fetching issues for {}", path));

    let mut browser = IssueBrowser::new(client, path);
    browser.fetch().await?;

    // --all keeps folding continuation pages until the server is done, or
    // until a page comes back with errors.
    if all {
        while browser.state().has_next_page() && !browser.state().has_errors() {
            browser.fetch_more().await?;
        }
    }

    print_view_state(browser.state(), format);

    Ok(())
}
