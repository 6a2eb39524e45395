use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use gazette::Catalog;
use gazette::error;
use gazette::error::{Chainable, Result};

use crate::config::Config;

/// Writes the catalog out as the static API surface: the full listing,
/// one record per article, and a sitemap.
pub fn write_api(catalog: &Catalog, config: &Config, output: &Path) -> Result<()> {
    let articles_dir = output.join("articles");
    fs::create_dir_all(&articles_dir)
        .chain(error!(Io: "failed to create the output directory",
                      "path" => articles_dir.display()))?;

    write_json(&output.join("index.json"), catalog.articles())?;
    for article in catalog.iter() {
        write_json(&articles_dir.join(format!("{}.json", article.slug)), article)?;
    }

    let sitemap_path = output.join("sitemap.xml");
    fs::write(&sitemap_path, sitemap(catalog, &config.site))
        .chain(error!(Io: "failed to write the sitemap", "path" => sitemap_path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .chain(error!(Io: "failed to create an output file", "path" => path.display()))?;

    serde_json::to_writer(BufWriter::new(file), value)
        .chain(error!(Io: "failed to write an output file", "path" => path.display()))
}

fn sitemap(catalog: &Catalog, site: &str) -> String {
    let mut xml = String::new();
    let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(xml, r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    let _ = writeln!(xml, "  <url><loc>{site}/</loc></url>");
    for article in catalog.iter() {
        let _ = writeln!(xml, "  <url><loc>{site}/blog/{}</loc></url>", article.slug);
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_article(date: &str, name: &str) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("articles").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("article.md"),
            format!("---\ndate: {date}\ntagline: t\n---\n# {name}\n\nBody.\n"),
        ).unwrap();

        root
    }

    #[test]
    fn the_api_surface_is_written_out() {
        let site = site_with_article("2020-01-01", "hello");
        let catalog = Catalog::build(site.path().join("articles")).unwrap();
        let output = tempfile::tempdir().unwrap();

        let config = Config { site: "https://example.org".into(), ..Config::default() };
        write_api(&catalog, &config, output.path()).unwrap();

        let index = fs::read_to_string(output.path().join("index.json")).unwrap();
        let records: serde_json::Value = serde_json::from_str(&index).unwrap();
        assert_eq!(records[0]["slug"], "hello");

        let single = fs::read_to_string(output.path().join("articles/hello.json")).unwrap();
        let record: serde_json::Value = serde_json::from_str(&single).unwrap();
        assert_eq!(record["date"], "2020-01-01");

        let sitemap = fs::read_to_string(output.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.org/blog/hello</loc>"));
    }
}
