//! Assembly of the combined HTML document.
//!
//! The book is a single HTML file laid out for print: an inlined stylesheet,
//! a cover page, a table of contents, then one part per category. Each part
//! opens with a full-page divider and is followed by its documents' articles,
//! each behind a small header naming the page it came from. Article HTML is
//! copied byte for byte; everything generated here is escaped.
//!
//! Categories without any documents are left out entirely, so part numbers
//! always run from 1 with no gaps.

mod cover;
mod parts;
mod styles;
mod toc;

use crate::categories::Category;
use crate::document::Document;
use chrono::NaiveDate;

/// Front matter shown on the cover page.
#[derive(Debug, Clone)]
pub struct Cover {
    pub title: String,
    pub subtitle: String,
    /// Credit line; empty for none
    pub byline: String,
    /// Date shown as the generation date
    pub generated: NaiveDate,
}

/// Assemble the combined document.
pub fn assemble(cover: &Cover, categories: &[Category<Document>]) -> String {
    let mut sections: Vec<&Category<Document>> = categories
        .iter()
        .filter(|c| !c.documents.is_empty())
        .collect();
    sections.sort_by_key(|c| c.priority);

    let document_count = sections.iter().map(|c| c.documents.len()).sum();

    let mut html = String::with_capacity(
        16 * 1024
            + sections
                .iter()
                .flat_map(|c| &c.documents)
                .map(|d| d.article.len())
                .sum::<usize>(),
    );

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>{styles}  </style>
</head>
<body>
"#,
        title = html_escape::encode_text(&cover.title),
        styles = styles::stylesheet(),
    ));

    html.push_str(&cover::render(cover, document_count));
    html.push_str(&toc::render(&sections));
    for (i, section) in sections.iter().enumerate() {
        html.push_str(&parts::render(i + 1, section));
    }

    html.push_str("</body>\n</html>\n");
    html
}
