//! Loading rendered documentation pages.
//!
//! Pages are plain HTML files produced by the site generator. Two markers are
//! pulled out of each one: the `<title>` (minus the site-wide suffix) and the
//! `<article>` element wrapping the rendered markdown. Only the article's inner
//! HTML is bound into the book; the site chrome around it is discarded.

use crate::categories::{Category, DocumentEntry, Layout};
use crate::config::Configuration;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use regex::Regex;
use std::path::Path;

/// A page ready to be bound into the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub title: String,
    /// Inner HTML of the page's article element, untouched
    pub article: String,
}

/// Patterns for the markers embedded in each page.
#[derive(Debug)]
pub struct Markers {
    title: Regex,
    article: Regex,
    title_suffix: String,
}

impl Markers {
    pub fn new(article_class: &str, title_suffix: &str) -> Result<Markers> {
        let title = Regex::new(r"<title>([^<]+)</title>")
            .with_context(|| "Failed to compile title pattern")?;
        let article = Regex::new(&format!(
            r#"(?s)<article class="{}">(.*?)</article>"#,
            regex::escape(article_class)
        ))
        .with_context(|| format!("Failed to compile article pattern for class {article_class}"))?;
        Ok(Markers {
            title,
            article,
            title_suffix: title_suffix.to_string(),
        })
    }

    pub fn from_config(config: &Configuration) -> Result<Markers> {
        Markers::new(&config.article_class, &config.title_suffix)
    }

    /// The page title with the site suffix stripped, or the filename if the
    /// page has no title.
    pub fn title(&self, contents: &str, filename: &str) -> String {
        let Some(captures) = self.title.captures(contents) else {
            return filename.to_string();
        };
        let raw = &captures[1];
        let raw = if self.title_suffix.is_empty() {
            raw
        } else {
            raw.strip_suffix(self.title_suffix.as_str()).unwrap_or(raw)
        };
        html_escape::decode_html_entities(raw).to_string()
    }

    /// Inner HTML of the first article element, if the page has one.
    pub fn article<'a>(&self, contents: &'a str) -> Option<&'a str> {
        self.article
            .captures(contents)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

/// List the HTML pages in `dir`, sorted by filename.
pub fn list_pages(dir: &Path, excluded: &[String]) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
            log::debug!("skipping non UTF-8 filename {}", entry.path().display());
            continue;
        };
        if name.ends_with(".html") && !excluded.contains(&name) {
            pages.push(name);
        }
    }
    pages.sort();
    Ok(pages)
}

fn read_page(dir: &Path, filename: &str) -> Result<String> {
    let path = dir.join(filename);
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// List every page in `dir` along with its title.
pub fn scan_entries(
    dir: &Path,
    markers: &Markers,
    excluded: &[String],
) -> Result<Vec<DocumentEntry>> {
    list_pages(dir, excluded)?
        .into_iter()
        .map(|filename| {
            let contents = read_page(dir, &filename)?;
            let title = markers.title(&contents, &filename);
            Ok(DocumentEntry { filename, title })
        })
        .collect()
}

/// Load the article of every document in a layout.
///
/// Entries whose file no longer exists are skipped, as are pages without an
/// article element. A file that exists but can't be read fails the whole load.
pub fn load_layout(
    dir: &Path,
    layout: &Layout,
    markers: &Markers,
    progress: &ProgressBar,
) -> Result<Vec<Category<Document>>> {
    let mut loaded = Vec::with_capacity(layout.categories.len());

    for category in &layout.categories {
        let mut documents = Vec::with_capacity(category.documents.len());
        for entry in &category.documents {
            progress.inc(1);
            if !dir.join(&entry.filename).exists() {
                log::debug!("{} is listed but missing, skipping", entry.filename);
                continue;
            }

            let contents = read_page(dir, &entry.filename)?;
            match markers.article(&contents) {
                Some(article) => documents.push(Document {
                    filename: entry.filename.clone(),
                    title: entry.title.clone(),
                    article: article.to_string(),
                }),
                None => log::warn!(
                    "{} has no article content, leaving it out of the book",
                    entry.filename
                ),
            }
        }
        loaded.push(category.with_documents(documents));
    }

    Ok(loaded)
}
