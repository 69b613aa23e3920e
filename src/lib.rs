// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod state;

// Re-export commonly used items
pub use client::GitHubClient;
pub use config::{get_access_token, load_config, save_config, Config};
pub use error::{GitHubError, GitHubResult};
pub use models::*;
pub use state::{
    resolve_add_star_mutation, resolve_issues_query, resolve_remove_star_mutation, IssueBrowser,
    ViewState,
};
