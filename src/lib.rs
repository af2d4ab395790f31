use bitbucket_client::BitbucketClientBuilder;
use clients::api::{RepoSource, Result};
use github_client::GithubClientBuilder;
use log::info;
use size_stats::{aggregate, fetch_all, AggregateStats};

mod args;
mod progress;

pub use crate::args::{Args, Provider};

/// Completed run: the aggregate statistics plus the label of the
/// organization or workspace they were computed for.
pub struct SizeReport {
    pub scope: String,
    pub stats: AggregateStats,
}

pub async fn measure_repo_sizes(args: Args) -> Result<SizeReport> {
    match args.provider {
        Provider::Github { org, api_token, api_url } => {
            let client = GithubClientBuilder::default()
                .with_api_url(api_url)
                .try_with_token(api_token)?
                .build(org.clone())?;
            run(client, format!("org {}", org), args.page_size).await
        }
        Provider::Bitbucket {
            workspace,
            username,
            app_password,
            api_url,
        } => {
            let client = BitbucketClientBuilder::default()
                .with_api_url(api_url)
                .build(workspace.clone(), username, app_password)?;
            run(client, format!("workspace {}", workspace), args.page_size).await
        }
    }
}

async fn run<SOURCE: RepoSource>(source: SOURCE, scope: String, page_size: u32) -> Result<SizeReport> {
    let spinner = progress::fetch_spinner(&scope);
    let repos = fetch_all(&source, page_size, |count| spinner.inc(count as u64)).await?;
    spinner.println("Done fetching, calculating size...");
    spinner.finish_and_clear();
    info!("Fetched {} repositories for {}", repos.len(), scope);
    let stats = aggregate(repos);
    Ok(SizeReport { scope, stats })
}
