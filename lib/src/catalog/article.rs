use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::catalog::Document;
use crate::error::{Chainable, Result};
use crate::markdown::{Context, Dict};
use crate::util;

/// The final record for one document, ready to serialize as an API
/// response. Built once per catalog run; immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub name: String,
    pub slug: String,
    pub path: String,
    #[serde(serialize_with = "iso_date")]
    pub date: NaiveDate,
    pub title: Option<String>,
    pub html: String,
    pub tagline: Option<String>,
    pub image: Option<String>,
}

fn iso_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

impl Article {
    /// Assembles a record from a document and the side channel its
    /// pipeline run produced. `date` is the one key the catalog cannot
    /// do without: ordering depends on it.
    pub(crate) fn assemble(document: &Document, context: Context) -> Result<Article> {
        let Context { metadata, title, html } = context;

        let date = match metadata.get("date") {
            Some(value) => parse_date(value).context("article", &document.name)?,
            None => return err! {
                MissingField: "article metadata is missing a required key",
                "key" => "date",
                "article" => &document.name,
            },
        };

        Ok(Article {
            slug: util::slugify(&document.name),
            name: document.name.clone(),
            path: document.path.display().to_string(),
            tagline: string_field(&metadata, "tagline"),
            image: string_field(&metadata, "image"),
            date,
            title,
            html,
        })
    }
}

fn parse_date(value: &serde_yaml::Value) -> Result<NaiveDate> {
    let raw = value.as_str()
        .ok_or_else(|| error!(MetadataParse: "article date must be a string"))?;

    raw.parse::<NaiveDate>()
        .chain(error!(MetadataParse: "article date is not a calendar date", "date" => raw))
}

fn string_field(metadata: &Dict, key: &str) -> Option<String> {
    metadata.get(key).and_then(|value| value.as_str()).map(str::to_owned)
}
