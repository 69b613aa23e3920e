use std::io::{self, BufRead, Write};

use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::get_default_path;
use crate::error::ErrorContext;
use crate::formatting::print_view_state;
use crate::logging::log_info;
use crate::state::IssueBrowser;

/// Interactive loop over one repository: re-renders the view state after
/// every round trip, the way the original single-page app re-renders after
/// every reconciliation.
pub async fn handle_browse(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    let client = context.client().context("Failed to build GitHub client")?;

    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(get_default_path);

    let mut browser = IssueBrowser::new(client, path);
    browser.fetch().await?;
    print_view_state(browser.state(), "simple");

    let stdin = io::stdin();
    loop {
        print_prompt(&browser);
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "q" | "quit" => break,
            "m" | "more" => {
                if browser.state().has_next_page() {
                    browser.fetch_more().await?;
                } else {
                    println!("{}", "No more pages.".dimmed());
                    continue;
                }
            }
            "s" | "star" => {
                if let Err(e) = browser.toggle_star().await {
                    println!("{} {}", "Star toggle failed:".red(), e);
                    continue;
                }
            }
            // Empty input re-submits the current path from page one.
            "" => {
                browser.fetch().await?;
            }
            // Anything else is a new organization/repository path.
            other => {
                log_info(&format!("Switching to {}", other));
                browser.set_path(other);
                browser.fetch().await?;
            }
        }

        print_view_state(browser.state(), "simple");
    }

    Ok(())
}

fn print_prompt(browser: &IssueBrowser) {
    let mut actions = vec!["<org/repo> fetch", "s star", "q quit"];
    if browser.state().has_next_page() {
        actions.insert(1, "m more");
    }
    print!("\n[{}] {} ", actions.join(" | ").dimmed(), ">".bold());
    let _ = io::stdout().flush();
}
