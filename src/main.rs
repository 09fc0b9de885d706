use anyhow::Result;
use clap::Parser;
use ghrb::commands;
use ghrb::pipeline::FetchPlan;
use ghrb::source::RepoId;

/// ghrb - GitHub Release Browser
///
/// View a project's releases grouped by package and sorted in actual semver
/// order, not publish order.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for accessing private repositories or
/// avoiding rate limits.
///
/// Examples:
///   ghrb list vercel/next.js      # Fetch all pages at once
///   ghrb stream vercel/next.js    # Progressive, one page at a time
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL
    #[arg(
        long = "api-url",
        value_name = "URL",
        default_value = "https://api.github.com",
        global = true
    )]
    pub api_url: String,

    /// Maximum number of release pages to fetch
    #[arg(long = "max-pages", value_name = "N", default_value_t = 5, global = true)]
    pub max_pages: u32,

    /// Releases requested per page
    #[arg(long = "page-size", value_name = "N", default_value_t = 100, global = true)]
    pub page_size: u32,

    /// Simultaneous page requests in batch mode
    #[arg(long = "concurrency", value_name = "N", default_value_t = 5, global = true)]
    pub concurrency: usize,

    /// GitHub token used for authentication
    #[arg(
        long = "token",
        value_name = "TOKEN",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub token: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch all pages at once and print the grouped releases
    List(ListArgs),

    /// Fetch page by page, reprinting the groups as they grow
    Stream(StreamArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,
}

#[derive(clap::Args, Debug)]
pub struct StreamArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let plan = FetchPlan {
        max_pages: cli.max_pages,
        page_size: cli.page_size,
        concurrency: cli.concurrency,
    };
    let source = commands::build_source(&cli.api_url, cli.token.as_deref())?;

    match cli.command {
        Commands::List(args) => {
            let repo: RepoId = args.repo.parse()?;
            commands::list(&source, &repo, &plan).await?
        }
        Commands::Stream(args) => {
            let repo: RepoId = args.repo.parse()?;
            commands::stream(&source, &repo, plan).await?
        }
    }
    Ok(())
}
