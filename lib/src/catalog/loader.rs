use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Chainable, Result};

/// The fixed content file every article entry must contain.
pub const CONTENT_FILE: &str = "article.md";

/// One source document: its identifier (the directory entry name) and
/// the location of its content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the documents under `root`: every immediate child entry except
/// hidden (`.`-prefixed) and empty names, sorted by name so enumeration
/// order doesn't depend on the platform's directory order.
pub fn discover(root: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(root)
        .chain(error!(Io: "failed to list the article root", "path" => root.display()))?;

    let mut documents = vec![];
    for entry in entries {
        let entry = entry
            .chain(error!(Io: "failed to read an article root entry", "path" => root.display()))?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.is_empty() || name.starts_with('.') {
            continue;
        }

        let path = root.join(&name).join(CONTENT_FILE);
        documents.push(Document { name, path });
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}
