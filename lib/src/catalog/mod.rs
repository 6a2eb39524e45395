mod loader;
mod article;

pub use loader::*;
pub use article::*;

use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{Chainable, Result};
use crate::markdown::Pipeline;

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// The ordered, queryable collection of every article under a root.
/// Built once; read-only afterwards, so concurrent readers need no
/// synchronization.
#[derive(Debug)]
pub struct Catalog {
    articles: Vec<Article>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Builds the whole catalog: every document is read, transformed,
    /// and assembled (in parallel; runs share nothing), then the
    /// records are sorted by publication date, newest first. Any
    /// failing document aborts the whole build.
    pub fn build(root: impl AsRef<Path>) -> Result<Catalog> {
        let documents = discover(root.as_ref())?;
        let mut articles = documents.par_iter()
            .map(process)
            .collect::<Result<Vec<_>>>()?;

        // Stable: equal dates keep their enumeration order.
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        let index = articles.iter()
            .enumerate()
            .map(|(i, article)| (article.slug.clone(), i))
            .collect();

        Ok(Catalog { articles, index })
    }

    /// Builds the catalog into process-wide state, exactly once. Later
    /// calls return the already-built catalog regardless of `root`;
    /// picking up content changes requires a restart.
    pub fn init(root: impl AsRef<Path>) -> Result<&'static Catalog> {
        CATALOG.get_or_try_init(|| Catalog::build(root))
    }

    /// The process-wide catalog, if [`Catalog::init`] has run.
    pub fn global() -> Option<&'static Catalog> {
        CATALOG.get()
    }

    /// Looks up one article by exact slug.
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.index.get(slug).map(|&i| &self.articles[i])
    }

    /// Every article, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

fn process(document: &Document) -> Result<Article> {
    let raw = fs::read_to_string(&document.path)
        .chain(error!(Io: "failed to read article content", "path" => document.path.display()))?;

    let context = Pipeline::article().run(&raw).context("article", &document.name)?;
    Article::assemble(document, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    fn site(articles: &[(&str, &str)]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        for (name, content) in articles {
            let dir = root.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(CONTENT_FILE), content).unwrap();
        }

        root
    }

    fn entry(date: &str, title: &str) -> String {
        format!("---\ndate: {date}\ntagline: t\n---\n# {title}\n\nBody.\n")
    }

    #[test]
    fn articles_sort_newest_first() {
        let root = site(&[
            ("alpha", &entry("2020-01-01", "Alpha")),
            ("omega", &entry("2020-01-02", "Omega")),
        ]);

        let catalog = Catalog::build(root.path()).unwrap();
        let titles: Vec<_> = catalog.iter()
            .map(|a| a.title.as_deref().unwrap())
            .collect();

        assert_eq!(titles, ["Omega", "Alpha"]);
        for pair in catalog.articles().windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn equal_dates_keep_enumeration_order() {
        let root = site(&[
            ("c-last", &entry("2021-06-01", "C")),
            ("a-first", &entry("2021-06-01", "A")),
            ("b-middle", &entry("2021-06-01", "B")),
        ]);

        let catalog = Catalog::build(root.path()).unwrap();
        let slugs: Vec<_> = catalog.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, ["a-first", "b-middle", "c-last"]);
    }

    #[test]
    fn slug_lookup_finds_exactly_one_record() {
        let root = site(&[("hello", &entry("2020-01-01", "Hello"))]);
        let catalog = Catalog::build(root.path()).unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("hello").unwrap().title.as_deref(), Some("Hello"));
        assert!(catalog.get("goodbye").is_none());
    }

    #[test]
    fn a_document_without_a_heading_still_builds() {
        let root = site(&[("plain", "---\ndate: 2020-01-01\ntagline: t\n---\nNo heading.\n")]);
        let catalog = Catalog::build(root.path()).unwrap();

        let article = catalog.get("plain").unwrap();
        assert!(article.title.is_none());
        assert!(article.html.contains("No heading."));
    }

    #[test]
    fn a_missing_metadata_header_fails_the_build() {
        let root = site(&[("bare", "# Title\n\nNo header at all.\n")]);
        let error = Catalog::build(root.path()).unwrap_err();
        assert_eq!(error.kind(), Kind::MissingField);
        assert!(error.to_string().contains("bare"));
    }

    #[test]
    fn malformed_metadata_fails_the_build() {
        let root = site(&[("broken", "---\ndate: [unclosed\n---\nBody.\n")]);
        let error = Catalog::build(root.path()).unwrap_err();
        assert_eq!(error.kind(), Kind::MetadataParse);
        assert!(error.to_string().contains("broken"));
    }

    #[test]
    fn a_missing_content_file_fails_the_build() {
        let root = site(&[("good", &entry("2020-01-01", "Good"))]);
        fs::create_dir(root.path().join("empty-entry")).unwrap();

        let error = Catalog::build(root.path()).unwrap_err();
        assert_eq!(error.kind(), Kind::Io);
    }

    #[test]
    fn hidden_entries_are_ignored() {
        let root = site(&[
            ("visible", &entry("2020-01-01", "Visible")),
            (".draft", "not even markdown"),
        ]);

        let catalog = Catalog::build(root.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn the_global_catalog_initializes_once() {
        let root = site(&[("only", &entry("2020-01-01", "Only"))]);

        let first = Catalog::init(root.path()).unwrap();
        let again = Catalog::init("some/other/root").unwrap();
        assert!(std::ptr::eq(first, again));
        assert_eq!(Catalog::global().unwrap().len(), 1);
    }
}
