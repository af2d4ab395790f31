use async_trait::async_trait;
use clients::api::Error;
use clients::api::RepoPage;
use clients::api::RepoRecord;
use clients::api::Result;
use log::debug;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::Client;

mod builder;
mod payload;

pub use crate::builder::GithubClientBuilder;

/// Lists the public repositories of one GitHub organization.
///
/// Pagination follows the `Link` response header: as long as a `rel="next"`
/// part is present, the next page number is handed out as the cursor.
pub struct GithubClient {
    client: Client,
    api_url: String,
    org: String,
}

#[async_trait]
impl clients::api::RepoSource for GithubClient {
    async fn list_page(&self, cursor: Option<&str>, page_size: u32) -> Result<RepoPage> {
        let page = match cursor {
            Some(cursor) => cursor
                .parse::<u32>()
                .map_err(|_| Error::Error("invalid GitHub page cursor"))?,
            None => 1,
        };
        let request_url = format!("{}/orgs/{}/repos", self.api_url, self.org);
        let response = self
            .client
            .get(request_url)
            .query(&[
                ("type", "public".to_string()),
                ("per_page", page_size.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let next = has_next_page(response.headers()).then(|| (page + 1).to_string());
        let repos: Vec<RepoRecord> = response
            .json::<Vec<payload::Repo>>()
            .await?
            .into_iter()
            .map(RepoRecord::from)
            .collect();
        debug!("Fetched {} repositories from page {} of {}", repos.len(), page, self.org);
        Ok(RepoPage { repos, next })
    }
}

fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(header::LINK)
        .and_then(|value| value.to_str().ok())
        .map(|link| link.split(',').any(|part| part.contains("rel=\"next\"")))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use crate::GithubClientBuilder;
    use clients::api::RepoRecord;
    use clients::api::RepoSource;
    use secrecy::SecretString;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn paginates_until_link_header_runs_out() {
        let server = MockServer::start().await;
        let next_link = format!("<{}/orgs/acme/repos?page=2&per_page=2>; rel=\"next\"", server.uri());
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .and(query_param("type", "public"))
            .and(query_param("per_page", "2"))
            .and(query_param("page", "1"))
            .and(header("Authorization", "Bearer s3cret"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", next_link.as_str())
                    .set_body_raw(
                        r#"[{ "name": "alpha", "size": 100 }, { "name": "beta", "size": 200 }]"#,
                        "application/json",
                    ),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"[{ "name": "gamma", "size": 50 }]"#, "application/json"),
            )
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default()
            .with_api_url(server.uri())
            .try_with_token(SecretString::new("s3cret".to_string()))
            .unwrap()
            .build("acme")
            .unwrap();

        let first = client.list_page(None, 2).await.unwrap();
        assert_eq!(
            first.repos,
            vec![RepoRecord::new("alpha", 100 * 1024), RepoRecord::new("beta", 200 * 1024)],
            "sizes must be normalized from kilobytes to bytes"
        );
        assert_eq!(first.next.as_deref(), Some("2"));

        let second = client.list_page(first.next.as_deref(), 2).await.unwrap();
        assert_eq!(second.repos, vec![RepoRecord::new("gamma", 50 * 1024)]);
        assert_eq!(second.next, None);
    }

    #[tokio::test]
    async fn server_error_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default()
            .with_api_url(server.uri())
            .build("acme")
            .unwrap();

        assert!(client.list_page(None, 100).await.is_err());
    }
}
