use crate::GithubClient;
use clients::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    api_url: String,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        Self {
            client_builder: ClientBuilder::default(),
            api_url: "https://api.github.com".to_string(),
            headers,
        }
    }
}

impl GithubClientBuilder {
    pub fn try_with_token(self, token: secrecy::SecretString) -> Result<GithubClientBuilder> {
        let bearer = format!("Bearer {}", token.expose_secret());
        Ok(self.try_with_header(header::AUTHORIZATION, bearer)?)
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_api_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.api_url = url.as_ref().to_string();
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self, org: impl Into<String>) -> Result<GithubClient> {
        let client = self.client_builder.default_headers(self.headers).build()?;
        Ok(GithubClient {
            client,
            api_url: self.api_url,
            org: org.into(),
        })
    }
}
