use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    /// Reported in kilobytes by the API.
    pub size: u64,
}

impl From<Repo> for clients::api::RepoRecord {
    fn from(repo: Repo) -> Self {
        clients::api::RepoRecord::new(repo.name, repo.size * 1024)
    }
}

#[test]
fn repo_size_is_normalized_to_bytes() {
    let repo = Repo {
        name: "repo".to_string(),
        size: 100,
    };
    let record = clients::api::RepoRecord::from(repo);
    assert_eq!(record, clients::api::RepoRecord::new("repo", 102_400));
}
