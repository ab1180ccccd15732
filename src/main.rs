mod commands;
mod config;
mod controller;
mod error;
mod github;
mod render;
mod session;
mod types;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use commands::{display_banner, explore, generate_completions, search_repos};
use config::ExplorerConfig;
use github::GitHubClient;
use session::SearchStatus;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gitexplore")]
#[command(about = "Search GitHub repositories and page through the results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Search API base URL (overrides GITEXPLORE_API_URL and the config file)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories by keyword and print the result cards
    #[command(short_flag = 's', visible_alias = "find")]
    Search {
        /// Search term (GitHub search syntax is passed through)
        term: String,
        /// How many pages of 12 results to load
        #[arg(long, short = 'p', default_value_t = 1)]
        pages: u32,
    },
    /// Interactive search: type terms, :more for the next page, :quit to leave
    #[command(short_flag = 'e', visible_alias = "browse")]
    Explore {
        /// Term to search for straight away
        term: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn client(api_url: Option<&str>) -> Result<GitHubClient, error::ConfigError> {
    let config = ExplorerConfig::load(api_url)?;
    log::debug!("Using search API at {}", config.api_base_url);
    GitHubClient::new(&config)
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let api_url = cli.api_url.as_deref();

    match cli.command {
        None => display_banner(),
        Some(Commands::Completions { shell }) => generate_completions(shell),
        Some(Commands::Search { term, pages }) => {
            let backend = client(api_url)?;
            let status = search_repos(&backend, &term, pages, &mut io::stdout().lock())?;
            if status == SearchStatus::Error {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Explore { term }) => {
            let backend = client(api_url)?;
            explore(
                &backend,
                term.as_deref(),
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gitexplore: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_reach_their_commands() {
        let cli = Cli::try_parse_from(["gitexplore", "find", "react", "--pages", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref term, pages: 2 }) if term == "react"
        ));

        let cli = Cli::try_parse_from(["gitexplore", "browse"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Explore { term: None })));

        let cli = Cli::try_parse_from(["gitexplore", "-e", "rust"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Explore { term: Some(ref t) }) if t == "rust"
        ));
    }
}
