use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct RepoListing {
    pub values: Vec<Repo>,
    pub next: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    /// Reported in bytes by the API.
    pub size: u64,
}

impl From<Repo> for clients::api::RepoRecord {
    fn from(repo: Repo) -> Self {
        clients::api::RepoRecord::new(repo.name, repo.size)
    }
}

#[test]
fn repo_size_is_taken_as_bytes() {
    let repo = Repo {
        name: "repo".to_string(),
        size: 4096,
    };
    let record = clients::api::RepoRecord::from(repo);
    assert_eq!(record, clients::api::RepoRecord::new("repo", 4096));
}
