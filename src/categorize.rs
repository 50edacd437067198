//! The `categorize` command: classify pages and save the result.
//!
//! The saved categorization can be reviewed and hand-edited before `render`
//! picks it up; moving an entry between categories or reordering `files`
//! changes the book without touching the classifier.

use crate::categories::Layout;
use crate::config::Configuration;
use crate::document::{self, Markers};
use anyhow::Result;
use std::path::Path;

/// Number of titles previewed per category in the summary.
const PREVIEW_COUNT: usize = 3;

/// Classify every page in `dir` and write the categorization file.
pub fn run(dir: &Path, config: &Configuration) -> Result<Layout> {
    println!("Reorganizing documentation structure...\n");

    let markers = Markers::from_config(config)?;
    let entries = document::scan_entries(dir, &markers, &config.excluded_files())?;
    let layout = Layout::classify(entries);

    print!("{}", summary(&layout));

    let path = dir.join(&config.categories_file);
    layout.save(&path)?;
    println!("Saved categorization to {}", path.display());
    println!("\nNext steps:");
    println!("  1. Review {}", config.categories_file.display());
    println!("  2. Run `docbinder render` to create the PDF");

    Ok(layout)
}

/// Per-category document counts with a preview of the first few titles.
pub fn summary(layout: &Layout) -> String {
    let mut out = String::from("Documentation structure:\n\n");
    for category in &layout.categories {
        out.push_str(&format!(
            "{}: {} documents\n",
            category.name,
            category.documents.len()
        ));
        if category.hidden {
            out.push_str("  (Hidden from main navigation)\n\n");
        } else if !category.documents.is_empty() {
            out.push_str("  Top items:\n");
            for doc in category.documents.iter().take(PREVIEW_COUNT) {
                out.push_str(&format!("    - {}\n", doc.title));
            }
            out.push('\n');
        }
    }
    out
}
