//! Legacy layout recovered from the landing page's sidebar.
//!
//! Before categorizations were saved to JSON, the site's `index.html` was the
//! only record of how pages were grouped. Its sidebar holds one
//! `nav-category` block per section, and the n-th block fills the n-th of four
//! fixed sections.

use crate::categories::{Category, DocumentEntry, Layout};
use anyhow::{Context, Result};
use regex::Regex;

const SECTIONS: &[(&str, &str, &str)] = &[
    (
        "getting-started",
        "🚀 Getting Started",
        "READMEs, quickstarts, and high-level overviews",
    ),
    (
        "user-guides",
        "📖 User Guides",
        "Detailed guides, tutorials, and how-tos",
    ),
    (
        "architecture",
        "🏗️ Architecture & Deployment",
        "System architecture and deployment guides",
    ),
    (
        "implementation",
        "⚙️ Implementation Details",
        "Code documentation, compliance, and operations",
    ),
];

/// Parse the sidebar navigation of a landing page.
///
/// Returns `None` if the page has no sidebar. Entries are listed in
/// navigation order; whether their files exist is checked when loading.
pub fn parse(index_html: &str) -> Result<Option<Layout>> {
    let nav = Regex::new(r#"(?s)<nav class="sidebar-nav">(.*?)</nav>"#)
        .with_context(|| "Failed to compile navigation pattern")?;
    let block = Regex::new(r#"(?s)<div class="nav-category">(.*?)</div>"#)
        .with_context(|| "Failed to compile category pattern")?;
    let link = Regex::new(r#"<a href="\./([^"]+\.html)">([^<]+)</a>"#)
        .with_context(|| "Failed to compile link pattern")?;

    let Some(nav) = nav.captures(index_html).and_then(|c| c.get(1)) else {
        return Ok(None);
    };

    let mut categories: Vec<Category> = SECTIONS
        .iter()
        .zip(1..)
        .map(|(&(key, name, description), priority)| Category {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            priority,
            hidden: false,
            documents: Vec::new(),
        })
        .collect();

    let blocks = block.captures_iter(nav.as_str()).filter_map(|c| c.get(1));
    for (category, block) in categories.iter_mut().zip(blocks) {
        for captures in link.captures_iter(block.as_str()) {
            let title = html_escape::decode_html_entities(&captures[2]).to_string();
            category
                .documents
                .push(DocumentEntry::new(&captures[1], title));
        }
    }

    Ok(Some(Layout::new(categories)))
}
