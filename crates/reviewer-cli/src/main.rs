//! insights-reviewer CLI - post pull-request review feedback from the terminal.

use std::time::Duration;

use clap::{Parser, Subcommand};
use reviewer_core::{config, CommentSide, Config, GithubConfig, Review, ReviewComment};
use reviewer_github::GithubClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reviewer")]
#[command(version, about = "Post GitHub pull-request review feedback", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the GitHub API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an inline review comment on a pull request
    Comment {
        /// Repository full name (owner/repo)
        #[arg(long)]
        repo: String,

        /// Pull request number
        #[arg(long)]
        pr: u64,

        /// Commit SHA the comment refers to
        #[arg(long)]
        commit: String,

        /// Comment text
        #[arg(long)]
        body: String,

        /// File path within the repository
        #[arg(long)]
        path: String,

        /// Line number in the diff
        #[arg(long)]
        line: u32,

        /// Diff side the line refers to (left or right)
        #[arg(long, default_value = "right")]
        side: String,

        /// First line of a multi-line comment range
        #[arg(long)]
        start_line: Option<u32>,

        /// Diff side of the first line of the range
        #[arg(long)]
        start_side: Option<String>,
    },

    /// Create a review on a pull request
    Review {
        /// Repository full name (owner/repo)
        #[arg(long)]
        repo: String,

        /// Pull request number
        #[arg(long)]
        pr: u64,

        /// Commit SHA the review refers to
        #[arg(long)]
        commit: String,

        /// Review action (approve, comment, or request-changes)
        #[arg(long)]
        event: String,

        /// Review body text
        #[arg(long)]
        body: String,
    },

    /// Manage the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Set the GitHub API base URL
    SetUrl { url: String },
}

fn build_client(api_url: Option<String>, github: &GithubConfig) -> anyhow::Result<GithubClient> {
    let token = config::token_from_env()?;
    let base_url = api_url.unwrap_or_else(|| github.api_url.clone());

    Ok(GithubClient::with_base_url(base_url, token)
        .with_timeout(Duration::from_secs(github.timeout_secs)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stored = Config::load()?;
    let github = stored.github();

    match cli.command {
        Commands::Comment {
            repo,
            pr,
            commit,
            body,
            path,
            line,
            side,
            start_line,
            start_side,
        } => {
            let side: CommentSide = side.parse()?;
            let start_side = start_side
                .map(|s| s.parse::<CommentSide>())
                .transpose()?;

            let comment = ReviewComment {
                commit_id: commit,
                body,
                path,
                line,
                side,
                start_line,
                start_side,
            };

            let client = build_client(cli.api_url, &github)?;
            client
                .create_pull_request_review_comment(&repo, pr, &comment)
                .await?;

            tracing::info!(repo = repo.as_str(), pr = pr, "Review comment created");
        }
        Commands::Review {
            repo,
            pr,
            commit,
            event,
            body,
        } => {
            let review = Review {
                commit_id: commit,
                event: event.parse()?,
                body,
            };

            let client = build_client(cli.api_url, &github)?;
            client.create_pull_request_review(&repo, pr, &review).await?;

            tracing::info!(
                repo = repo.as_str(),
                pr = pr,
                event = review.event.as_str(),
                "Review created"
            );
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("config file: {}", Config::config_path()?.display());
                println!("api_url = {}", github.api_url);
                println!("timeout_secs = {}", github.timeout_secs);
            }
            ConfigCommands::SetUrl { url } => {
                let mut stored = stored;
                let mut github = github;
                github.api_url = url;
                stored.github = Some(github);
                stored.save()?;

                tracing::info!("Configuration saved");
            }
        },
    }

    Ok(())
}
