use std::path::{Path, PathBuf};

use serde::Deserialize;

use gazette::error;
use gazette::error::{Chainable, Result};

pub const CONFIG_FILE: &str = "config.toml";

/// Site-level settings. Everything defaults, so a bare site directory
/// works out of the box.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory under the site root holding one subdirectory per
    /// article.
    pub articles: PathBuf,
    /// Base URL prefixed to every location in the sitemap.
    pub site: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            articles: PathBuf::from("articles"),
            site: String::new(),
        }
    }
}

impl Config {
    pub fn load(site_root: &Path) -> Result<Config> {
        let path = site_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = std::fs::read_to_string(&path)
            .chain(error!(Io: "failed to read site configuration", "path" => path.display()))?;

        toml::from_str(&raw)
            .chain(error!(Config: "site configuration is malformed", "path" => path.display()))
    }
}
