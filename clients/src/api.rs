use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(&'static str),
    // the only reason of `reqwest` dependency..
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Single repository as reported by a listing endpoint.
///
/// `size_bytes` is always a byte count. Providers reporting other units
/// (GitHub reports kilobytes) normalize before constructing the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRecord {
    pub name: String,
    pub size_bytes: u64,
}

impl RepoRecord {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        RepoRecord {
            name: name.into(),
            size_bytes,
        }
    }
}

/// One page of listing results.
///
/// `next` is the provider's next-page pointer rendered as an opaque cursor:
/// a page number for GitHub, a full URL for Bitbucket. `None` means the
/// listing is exhausted.
#[derive(Debug)]
pub struct RepoPage {
    pub repos: Vec<RepoRecord>,
    pub next: Option<String>,
}

/// Uniform "list one page of repositories" capability over a fixed
/// provider identity (an organization or a workspace).
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetches the page addressed by `cursor` (`None` for the first page).
    async fn list_page(&self, cursor: Option<&str>, page_size: u32) -> Result<RepoPage>;
}
