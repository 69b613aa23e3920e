use clap::ArgMatches;

use crate::client::GitHubClient;
use crate::config::{load_config, save_config};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config();
        config.access_token = Some(token.clone());
        save_config(&config)?;
        println!("Access token saved successfully!");

        // Test the token with the lightest query there is
        let client = GitHubClient::new(Some(token.clone()))?;
        match client.fetch_organization("github").await {
            Ok(organization) => println!("✅ Token works: reached {}", organization.name),
            Err(e) => println!("❌ Failed to authenticate: {}", e),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.access_token {
            Some(token) if token.len() > 12 => {
                println!("Access token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("Access token configured (too short to preview)"),
            None => println!("No access token configured"),
        }
    } else if let Some(path) = matches.get_one::<String>("default-path") {
        let mut config = load_config();
        config.default_path = Some(path.clone());
        save_config(&config)?;
        println!("Default path set to {}", path);
    } else {
        println!("Usage: gh-issues auth --token <TOKEN>, --show or --default-path <ORG/REPO>");
    }
    Ok(())
}
