use async_trait::async_trait;
use clients::api::RepoPage;
use clients::api::RepoRecord;
use clients::api::Result;
use log::debug;
use reqwest::Client;
use secrecy::ExposeSecret;
use secrecy::SecretString;

mod builder;
mod payload;

pub use crate::builder::BitbucketClientBuilder;

/// Lists the repositories of one Bitbucket workspace.
///
/// Pagination follows the `next` field of the listing body, a ready-made URL
/// that is requested verbatim as the cursor for the following page.
pub struct BitbucketClient {
    client: Client,
    api_url: String,
    workspace: String,
    username: String,
    app_password: SecretString,
}

#[async_trait]
impl clients::api::RepoSource for BitbucketClient {
    async fn list_page(&self, cursor: Option<&str>, page_size: u32) -> Result<RepoPage> {
        let request = match cursor {
            Some(next_url) => self.client.get(next_url),
            None => {
                let request_url = format!("{}/repositories/{}", self.api_url, self.workspace);
                self.client
                    .get(request_url)
                    .query(&[("pagelen", page_size.to_string())])
            }
        };
        let listing = request
            .basic_auth(&self.username, Some(self.app_password.expose_secret()))
            .send()
            .await?
            .error_for_status()?
            .json::<payload::RepoListing>()
            .await?;
        let repos: Vec<RepoRecord> = listing.values.into_iter().map(RepoRecord::from).collect();
        debug!("Fetched {} repositories from workspace {}", repos.len(), self.workspace);
        Ok(RepoPage {
            repos,
            next: listing.next,
        })
    }
}
