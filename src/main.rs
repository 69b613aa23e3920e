use std::process;

use clap::{Arg, Command};

use github_issues_cli::commands::{handle_auth, handle_browse, handle_issues, handle_star};
use github_issues_cli::logging;

fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("ORG/REPO")
        .help("Organization and repository, e.g. facebook/react")
        .required(false)
}

#[tokio::main]
async fn main() {
    let _ = logging::init_logging();
    std::panic::set_hook(Box::new(|info| {
        logging::log_panic_info(info);
    }));

    let app = Command::new("gh-issues")
        .about("Browse open issues of a GitHub repository from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the GitHub personal access token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your GitHub personal access token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured token (abbreviated)")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("default-path")
                        .long("default-path")
                        .value_name("ORG/REPO")
                        .help("Set the repository used when none is given")
                        .required(false),
                ),
        )
        .subcommand(
            Command::new("issues")
                .about("List open issues of a repository")
                .arg(path_arg())
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Follow pagination until every page is fetched")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: simple or json")
                        .required(false),
                ),
        )
        .subcommand(
            Command::new("star")
                .about("Toggle your star on a repository")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("browse")
                .about("Interactively page through issues and toggle stars")
                .arg(path_arg()),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("issues", sub_matches)) => handle_issues(sub_matches).await,
        Some(("star", sub_matches)) => handle_star(sub_matches).await,
        Some(("browse", sub_matches)) => handle_browse(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'gh-issues --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        logging::log_error(&format!("{}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
