use clients::api::{RepoRecord, RepoSource, Result};
use log::debug;

/// Pulls every page the source reports, in fetch order, into one collection.
///
/// `on_page` is called with the number of repositories in each received page.
/// It only drives progress rendering and has no effect on the fetch itself.
///
/// The first page error is returned as-is; records accumulated up to that
/// point are dropped with it.
pub async fn fetch_all<SOURCE, F>(source: &SOURCE, page_size: u32, mut on_page: F) -> Result<Vec<RepoRecord>>
where
    SOURCE: RepoSource,
    F: FnMut(usize),
{
    let mut repos = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = source.list_page(cursor.as_deref(), page_size).await?;
        debug!("Received page with {} repositories", page.repos.len());
        on_page(page.repos.len());
        repos.extend(page.repos);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::fetch_all;
    use async_trait::async_trait;
    use clients::api::{Error, RepoPage, RepoRecord, RepoSource, Result};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedSource {
        pages: Mutex<VecDeque<Result<RepoPage>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<RepoPage>>) -> Self {
            ScriptedSource {
                pages: Mutex::new(pages.into()),
            }
        }

        fn remaining(&self) -> usize {
            self.pages.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RepoSource for ScriptedSource {
        async fn list_page(&self, _cursor: Option<&str>, _page_size: u32) -> Result<RepoPage> {
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Error("fetched past the last page")))
        }
    }

    fn page(names: &[&str], next: Option<&str>) -> Result<RepoPage> {
        Ok(RepoPage {
            repos: names.iter().map(|name| RepoRecord::new(*name, 1)).collect(),
            next: next.map(String::from),
        })
    }

    #[tokio::test]
    async fn drains_exactly_the_reported_pages() {
        let source = ScriptedSource::new(vec![
            page(&["a", "b", "c"], Some("2")),
            page(&["d"], Some("3")),
            page(&[], None),
        ]);

        let mut per_page = Vec::new();
        let repos = fetch_all(&source, 100, |count| per_page.push(count)).await.unwrap();

        assert_eq!(repos.len(), 4);
        assert_eq!(per_page, vec![3, 1, 0]);
        assert_eq!(source.remaining(), 0);
    }

    #[tokio::test]
    async fn keeps_fetch_order_across_pages() {
        let source = ScriptedSource::new(vec![page(&["a", "b"], Some("2")), page(&["c"], None)]);

        let repos = fetch_all(&source, 100, |_| {}).await.unwrap();

        let names: Vec<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn first_page_error_aborts_the_fetch() {
        let source = ScriptedSource::new(vec![
            page(&["a"], Some("2")),
            Err(Error::Error("rate limited")),
            page(&["b"], None),
        ]);

        let result = fetch_all(&source, 100, |_| {}).await;

        assert!(result.is_err());
        assert_eq!(source.remaining(), 1, "fetch must stop at the failed page");
    }
}
