//! `docbinder.toml` configuration.
//!
//! Every field has a default, so the file is optional and may set any subset of
//! keys. Paths are relative to the documentation directory.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the documentation directory.
pub const CONFIG_FILE: &str = "docbinder.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Title shown on the cover page and in the document head
    pub title: String,
    /// Subtitle shown under the cover title
    pub subtitle: String,
    /// Cover credit line. Empty string for none.
    pub byline: String,
    /// Suffix stripped from each page's `<title>`
    pub title_suffix: String,
    /// Class of the `<article>` element wrapping a page's rendered content
    pub article_class: String,
    /// Landing page; never bound into the book but may supply navigation order
    pub index_file: String,
    /// Saved categorization written by `categorize` and read by `render`
    pub categories_file: PathBuf,
    /// Intermediate combined HTML file, removed once a PDF is produced
    pub combined_html: PathBuf,
    /// Output PDF file path
    pub outfile: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            title: "Care Commons Documentation".to_string(),
            subtitle: "Shared care software, community owned".to_string(),
            byline: "Neighborhood Lab".to_string(),
            title_suffix: " - Care Commons Documentation".to_string(),
            article_class: "markdown-content".to_string(),
            index_file: "index.html".to_string(),
            categories_file: PathBuf::from("doc-categories.json"),
            combined_html: PathBuf::from("care-commons-docs-combined.html"),
            outfile: PathBuf::from("care-commons-documentation.pdf"),
        }
    }
}

impl Configuration {
    /// Load the configuration for a documentation directory.
    ///
    /// An explicitly requested file must exist. Without one, `docbinder.toml`
    /// in `dir` is used if present and the defaults otherwise.
    pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Configuration> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!(
                        "Configuration file '{}' does not exist",
                        path.display()
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let path = dir.join(CONFIG_FILE);
                if !path.exists() {
                    log::debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
                    return Ok(Configuration::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        let config: Configuration = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`Configuration::load`], but a missing or broken file only warns
    /// and the defaults are used. For the wizard, which is how a broken file
    /// gets replaced.
    pub fn load_or_default(dir: &Path, explicit: Option<&Path>) -> Configuration {
        Configuration::load(dir, explicit).unwrap_or_else(|e| {
            log::warn!("{e:#}, starting from the defaults");
            Configuration::default()
        })
    }

    /// Files in the documentation directory that are never bound as pages.
    pub fn excluded_files(&self) -> Vec<String> {
        let mut excluded = vec![self.index_file.clone()];
        if let Some(name) = self.combined_html.file_name() {
            excluded.push(name.to_string_lossy().to_string());
        }
        excluded
    }
}
