use colored::*;

use crate::models::{Issue, Repository};
use crate::state::ViewState;

/// Map GitHub's reaction content enum to something readable in a terminal.
pub fn get_reaction_icon(content: &str) -> &'static str {
    match content {
        "THUMBS_UP" => "👍",
        "THUMBS_DOWN" => "👎",
        "LAUGH" => "😄",
        "HOORAY" => "🎉",
        "CONFUSED" => "😕",
        "HEART" => "❤️",
        "ROCKET" => "🚀",
        "EYES" => "👀",
        _ => "•",
    }
}

/// Label for the star toggle, mirroring the button the state drives: the
/// next action, not the current condition.
pub fn star_toggle_label(repository: &Repository) -> &'static str {
    if repository.viewer_has_starred {
        "Unstar"
    } else {
        "Star"
    }
}

pub fn print_view_state(state: &ViewState, format: &str) {
    if format == "json" {
        let json = serde_json::to_string_pretty(state).unwrap();
        println!("{}", json);
        return;
    }

    // Errors replace the data view entirely, like the component they mimic.
    if let Some(summary) = state.error_summary() {
        println!("{} {}", "Something went wrong:".red().bold(), summary);
        return;
    }

    let organization = match &state.organization {
        Some(organization) => organization,
        None => {
            println!("{}", "No information".dimmed());
            return;
        }
    };

    println!(
        "{} {} ({})",
        "Issues from Organization:".bold(),
        organization.name.blue(),
        organization.url.dimmed()
    );

    let repository = &organization.repository;
    println!(
        "{} {} ({})",
        "In Repository:".bold(),
        repository.name.blue(),
        repository.url.dimmed()
    );
    println!(
        "⭐ {} [{}]",
        repository.stargazers.total_count.to_string().yellow(),
        star_toggle_label(repository).cyan()
    );

    let issues = &repository.issues;
    if issues.edges.is_empty() {
        println!("\n{}", "No open issues.".dimmed());
    } else {
        println!(
            "\n{} of {} open issues:",
            issues.edges.len(),
            issues.total_count
        );
        println!("{}", "─".repeat(50).dimmed());
        for edge in &issues.edges {
            print_issue(&edge.node);
        }
        println!("{}", "─".repeat(50).dimmed());
    }

    if issues.page_info.has_next_page {
        println!("{}", "More issues available.".dimmed());
    }
}

fn print_issue(issue: &Issue) {
    let reactions = issue
        .reactions
        .edges
        .iter()
        .map(|e| get_reaction_icon(&e.node.content))
        .collect::<Vec<_>>()
        .join(" ");

    if reactions.is_empty() {
        println!("  {}", issue.title);
    } else {
        println!("  {} {}", issue.title, reactions);
    }
    println!("    {}", issue.url.dimmed());
}
