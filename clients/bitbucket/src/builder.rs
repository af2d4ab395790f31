use crate::BitbucketClient;
use clients::api::Result;
use reqwest::ClientBuilder;
use secrecy::SecretString;

pub struct BitbucketClientBuilder {
    client_builder: ClientBuilder,
    api_url: String,
}

impl Default for BitbucketClientBuilder {
    fn default() -> Self {
        Self {
            client_builder: ClientBuilder::default(),
            api_url: "https://api.bitbucket.org/2.0".to_string(),
        }
    }
}

impl BitbucketClientBuilder {
    pub fn with_api_url<STR: AsRef<str>>(mut self, url: STR) -> BitbucketClientBuilder {
        self.api_url = url.as_ref().to_string();
        self
    }

    pub fn build(
        self,
        workspace: impl Into<String>,
        username: impl Into<String>,
        app_password: SecretString,
    ) -> Result<BitbucketClient> {
        let client = self.client_builder.build()?;
        Ok(BitbucketClient {
            client,
            api_url: self.api_url,
            workspace: workspace.into(),
            username: username.into(),
            app_password,
        })
    }
}
