//! CLI for the git-code tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use git_code::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "git-code")]
#[command(author, version, about = "List and clone the repositories of a GitHub organization", long_about = None)]
struct Cli {
    /// Organization to list (overrides the config file)
    #[arg(long, global = true, env = "GIT_CODE_ORGANIZATION")]
    organization: Option<String>,

    /// Path to the configuration file (default: ~/.git-code.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a list of repositories for your organization
    #[command(visible_aliases = ["s", "list", "l"])]
    Show {
        /// Only show repositories whose name contains this text
        name_filter: Option<String>,
    },

    /// Clone the single repository whose name contains the fragment
    #[command(visible_aliases = ["c", "cl"])]
    Clone {
        /// Partial repository name; it must match exactly one repository
        name_fragment: Option<String>,

        /// Target directory to clone into, existing directory must be empty
        #[arg(long)]
        directory: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        let code = match err.downcast_ref::<GitCodeError>() {
            Some(GitCodeError::MissingArgument) => {
                eprintln!("{}", GitCodeError::MissingArgument);
                eprintln!("#> git-code clone 'reponame'");
                GitCodeError::MissingArgument.exit_code()
            }
            Some(e) => {
                eprintln!("{:#}", err);
                e.exit_code()
            }
            None => {
                eprintln!("{:#}", err);
                1
            }
        };
        std::process::exit(code);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_organization(cli.organization);

    match cli.command {
        Commands::Show { name_filter } => cmd_show(&config, name_filter.unwrap_or_default()),
        Commands::Clone {
            name_fragment,
            directory,
        } => cmd_clone(&config, name_fragment, directory),
    }
}

fn load_token(config: &Config) -> Result<String> {
    let source = TokenFile::resolve(config.token_file.as_deref())?;
    Ok(source.token()?)
}

fn cmd_show(config: &Config, name_filter: String) -> Result<()> {
    let organization = config.require_organization()?;
    let token = load_token(config)?;
    let client = GitHubClient::with_base_url(token, config.api_url());

    let json = show(&client, organization, &name_filter)?;
    println!("{}", json);
    Ok(())
}

fn cmd_clone(
    config: &Config,
    name_fragment: Option<String>,
    directory: Option<PathBuf>,
) -> Result<()> {
    let fragment = name_fragment
        .filter(|f| !f.is_empty())
        .ok_or(GitCodeError::MissingArgument)?;
    let organization = config.require_organization()?;
    let token = load_token(config)?;

    let client = GitHubClient::with_base_url(token, config.api_url());
    let cloner = GitCloner::new(BasicAuth::token(client.token()));
    let options = CloneOptions {
        organization: organization.to_string(),
        fragment,
        directory: directory.filter(|d| !d.as_os_str().is_empty()),
    };

    let cloned = clone(&client, &cloner, &options)?;
    tracing::info!(repo = %cloned.repo.name, directory = %cloned.directory.display(), "clone complete");
    Ok(())
}
