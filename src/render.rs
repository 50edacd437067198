//! The `render` command: bind a documentation directory into a PDF.
//!
//! The book layout comes from the first source available:
//! 1. the categorization saved by `categorize`
//! 2. the landing page's sidebar navigation
//! 3. classifying the directory on the spot
//!
//! The combined HTML is written next to the pages (so relative image paths
//! keep working) and only removed once a PDF has been produced.

use crate::assembly::{self, Cover};
use crate::categories::Layout;
use crate::config::Configuration;
use crate::convert::{self, ConversionOutcome, SearchPath, CONVERTERS};
use crate::document::{self, Markers};
use crate::navigation;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// What a render produced.
#[derive(Debug)]
pub struct RenderStats {
    /// Documents bound into the book
    pub document_count: usize,
    pub combined_html: PathBuf,
    pub outfile: PathBuf,
    pub outcome: ConversionOutcome,
}

/// Pick the layout for a render.
pub fn select_layout(dir: &Path, config: &Configuration, markers: &Markers) -> Result<Layout> {
    let categories_path = dir.join(&config.categories_file);
    if categories_path.exists() {
        match Layout::load(&categories_path) {
            Ok(layout) => {
                log::info!("using categorization from {}", categories_path.display());
                return Ok(layout);
            }
            Err(e) => log::warn!("{e:#}, falling back to the built-in categories"),
        }
    }

    let index_path = dir.join(&config.index_file);
    if index_path.exists() {
        let contents = std::fs::read_to_string(&index_path)
            .with_context(|| format!("Failed to read {}", index_path.display()))?;
        if let Some(layout) = navigation::parse(&contents)? {
            log::info!("using navigation from {}", index_path.display());
            return Ok(layout);
        }
        log::debug!("{} has no sidebar navigation", index_path.display());
    }

    log::info!("classifying pages in {}", dir.display());
    let entries = document::scan_entries(dir, markers, &config.excluded_files())?;
    Ok(Layout::classify(entries))
}

/// Render the documentation in `dir`.
///
/// Only loading and writing the combined HTML can fail; a failed conversion
/// is reported through [`RenderStats::outcome`].
pub fn render(
    dir: &Path,
    config: &Configuration,
    generated: NaiveDate,
    search: &SearchPath,
    progress: &ProgressBar,
) -> Result<RenderStats> {
    let markers = Markers::from_config(config)?;
    let layout = select_layout(dir, config, &markers)?;

    progress.set_length(layout.document_count() as u64);
    progress.set_message("Loading pages...");
    let categories = document::load_layout(dir, &layout, &markers, progress)?;
    progress.finish_and_clear();

    println!("Category breakdown:");
    for category in &categories {
        println!("  {}: {} files", category.name, category.documents.len());
    }
    println!();

    let document_count = categories.iter().map(|c| c.documents.len()).sum();
    let cover = Cover {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        byline: config.byline.clone(),
        generated,
    };
    let html = assembly::assemble(&cover, &categories);

    let combined_html = dir.join(&config.combined_html);
    std::fs::write(&combined_html, html)
        .with_context(|| format!("Failed to write {}", combined_html.display()))?;
    println!("Created combined HTML: {}", combined_html.display());

    println!("\nConverting to PDF...");
    let outfile = dir.join(&config.outfile);
    let outcome = convert::convert(CONVERTERS, search, &combined_html, &outfile);

    if matches!(outcome, ConversionOutcome::Converted { .. }) && outfile.exists() {
        if let Err(e) = std::fs::remove_file(&combined_html) {
            log::warn!("Failed to remove {}: {e}", combined_html.display());
        }
    }

    Ok(RenderStats {
        document_count,
        combined_html,
        outfile,
        outcome,
    })
}

/// Tell the user what happened and, if there's no PDF, what to do about it.
pub fn report(stats: &RenderStats) {
    println!("Bound {} documents", stats.document_count);
    match &stats.outcome {
        ConversionOutcome::Converted { converter } => {
            println!("\nPDF generated with {converter}: {}", stats.outfile.display());
            match std::fs::metadata(&stats.outfile) {
                Ok(meta) => {
                    let size = byte_unit::Byte::from_u64(meta.len())
                        .get_appropriate_unit(byte_unit::UnitType::Decimal);
                    println!("  Size: {size:.1}");
                }
                Err(e) => log::warn!("Failed to stat {}: {e}", stats.outfile.display()),
            }
        }
        ConversionOutcome::Unavailable { failed } => {
            if failed.is_empty() {
                println!("\nNo PDF converter found.");
            } else {
                println!("\nPDF conversion failed ({}).", failed.join(", "));
            }
            println!("Combined HTML saved as: {}", stats.combined_html.display());
            println!("\nTo convert to PDF:");
            for converter in CONVERTERS.iter().take(2) {
                println!("  - Install {}: {}", converter.program, converter.install_hint);
            }
            println!("  - Or open the HTML file and use \"Print to PDF\"");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::DocumentEntry;
    use tempfile::TempDir;

    const SUFFIX: &str = " - Care Commons Documentation";

    fn page(dir: &Path, filename: &str, title: &str, article: Option<&str>) {
        let body = article
            .map(|a| format!(r#"<article class="markdown-content">{a}</article>"#))
            .unwrap_or_default();
        let html = format!(
            "<html><head><title>{title}{SUFFIX}</title></head><body>{body}</body></html>"
        );
        std::fs::write(dir.join(filename), html).expect("can write page");
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn render_without_converters(dir: &Path) -> RenderStats {
        render(
            dir,
            &Configuration::default(),
            today(),
            &SearchPath::default(),
            &ProgressBar::hidden(),
        )
        .expect("can render")
    }

    #[test]
    fn renders_start_before_operations() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));
        page(dir.path(), "runbook-db.html", "DB Runbook", Some("<p>restore</p>"));
        std::fs::write(dir.path().join("index.html"), "<html>landing</html>").expect("can write");

        let stats = render_without_converters(dir.path());
        assert_eq!(stats.document_count, 2);

        let html = std::fs::read_to_string(&stats.combined_html).expect("combined html kept");
        assert_eq!(html.matches(r#"<div class="part-divider">"#).count(), 2);
        let intro = html.find("<li>Introduction</li>").expect("intro in toc");
        let runbook = html.find("<li>DB Runbook</li>").expect("runbook in toc");
        assert!(intro < runbook);
        assert!(html.contains("🎯 Start Here"));
        assert!(html.contains("⚙️ Operations"));
        assert!(!html.contains("landing"));
        assert!(html.contains("<p>Generated: October 16, 2026</p>"));
    }

    #[test]
    fn pages_without_articles_are_left_out() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));
        page(dir.path(), "glossary.html", "Glossary", None);

        let stats = render_without_converters(dir.path());
        assert_eq!(stats.document_count, 1);

        let html = std::fs::read_to_string(&stats.combined_html).expect("combined html kept");
        assert!(html.contains("<p>Total Documents: 1</p>"));
        assert!(!html.contains("glossary.html"));
        assert!(!html.contains("Glossary"));
    }

    #[test]
    fn missing_converter_keeps_html_and_skips_pdf() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));

        let stats = render_without_converters(dir.path());
        assert_eq!(stats.outcome, ConversionOutcome::Unavailable { failed: vec![] });
        assert!(stats.combined_html.exists());
        assert!(!stats.outfile.exists());
    }

    #[cfg(unix)]
    #[test]
    fn successful_conversion_removes_combined_html() {
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().expect("can create temp dir");
        let script = bin.path().join("weasyprint");
        std::fs::write(&script, "#!/bin/sh\ncp \"$1\" \"$2\"\n").expect("can write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("can make script executable");

        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));

        let stats = render(
            dir.path(),
            &Configuration::default(),
            today(),
            &SearchPath::new(vec![bin.path().to_path_buf()]),
            &ProgressBar::hidden(),
        )
        .expect("can render");

        assert_eq!(
            stats.outcome,
            ConversionOutcome::Converted {
                converter: "weasyprint"
            }
        );
        assert!(stats.outfile.exists());
        assert!(!stats.combined_html.exists());
    }

    #[cfg(unix)]
    #[test]
    fn converter_that_writes_nothing_keeps_combined_html() {
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().expect("can create temp dir");
        let script = bin.path().join("weasyprint");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").expect("can write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("can make script executable");

        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));

        let stats = render(
            dir.path(),
            &Configuration::default(),
            today(),
            &SearchPath::new(vec![bin.path().to_path_buf()]),
            &ProgressBar::hidden(),
        )
        .expect("can render");

        assert_eq!(
            stats.outcome,
            ConversionOutcome::Unavailable {
                failed: vec!["weasyprint"]
            }
        );
        assert!(!stats.outfile.exists());
        assert!(stats.combined_html.exists());
    }

    #[test]
    fn saved_categorization_takes_precedence() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));
        page(dir.path(), "runbook-db.html", "DB Runbook", Some("<p>restore</p>"));

        // reversed relative to classification
        let json = r#"{
            "first": { "name": "First", "description": "", "priority": 1,
                       "files": [{ "filename": "runbook-db.html", "title": "DB Runbook" }] },
            "second": { "name": "Second", "description": "", "priority": 2,
                        "files": [{ "filename": "readme.html", "title": "Introduction" },
                                  { "filename": "deleted.html", "title": "Deleted" }] }
        }"#;
        std::fs::write(dir.path().join("doc-categories.json"), json).expect("can write");

        let config = Configuration::default();
        let markers = Markers::from_config(&config).expect("can build markers");
        let layout = select_layout(dir.path(), &config, &markers).expect("can select layout");
        assert_eq!(layout.categories[0].key, "first");

        let stats = render_without_converters(dir.path());
        assert_eq!(stats.document_count, 2);
        let html = std::fs::read_to_string(&stats.combined_html).expect("combined html kept");
        let runbook = html.find("<li>DB Runbook</li>").expect("runbook in toc");
        let intro = html.find("<li>Introduction</li>").expect("intro in toc");
        assert!(runbook < intro);
    }

    #[test]
    fn corrupt_categorization_falls_back() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));
        std::fs::write(dir.path().join("doc-categories.json"), "{ broken").expect("can write");

        let config = Configuration::default();
        let markers = Markers::from_config(&config).expect("can build markers");
        let layout = select_layout(dir.path(), &config, &markers).expect("can select layout");
        assert_eq!(layout.categories[0].key, "start");
        assert_eq!(
            layout.categories[0].documents,
            vec![DocumentEntry::new("readme.html", "Introduction")]
        );
    }

    #[test]
    fn landing_navigation_is_used_without_categorization() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));
        std::fs::write(
            dir.path().join("index.html"),
            r#"<nav class="sidebar-nav"><div class="nav-category"><a href="./readme.html">Intro</a></div></nav>"#,
        )
        .expect("can write");

        let config = Configuration::default();
        let markers = Markers::from_config(&config).expect("can build markers");
        let layout = select_layout(dir.path(), &config, &markers).expect("can select layout");
        assert_eq!(layout.categories[0].key, "getting-started");
        assert_eq!(layout.categories[0].documents[0].title, "Intro");
    }

    #[test]
    fn unreadable_page_fails_the_render() {
        let dir = TempDir::new().expect("can create temp dir");
        std::fs::write(dir.path().join("readme.html"), [0xff, 0xfe]).expect("can write");

        let result = render(
            dir.path(),
            &Configuration::default(),
            today(),
            &SearchPath::default(),
            &ProgressBar::hidden(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn rerendering_ignores_previous_combined_html() {
        let dir = TempDir::new().expect("can create temp dir");
        page(dir.path(), "readme.html", "Introduction", Some("<p>intro</p>"));

        let first = render_without_converters(dir.path());
        assert!(first.combined_html.exists());
        let second = render_without_converters(dir.path());
        assert_eq!(second.document_count, 1);
    }
}
