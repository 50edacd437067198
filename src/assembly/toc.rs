//! Table of contents.
//!
//! Titles are listed without links: page numbers only exist once the
//! converter paginates the document.

use crate::categories::Category;
use crate::document::Document;

/// Render the table of contents for the non-empty categories, in order.
pub fn render(parts: &[&Category<Document>]) -> String {
    let mut html = String::from(
        r#"  <div class="toc">
    <h1>Table of Contents</h1>
"#,
    );

    for part in parts {
        html.push_str(&format!(
            r#"    <div class="toc-category">
      <h2>{name}</h2>
      <div class="description">{description}</div>
      <ul>
"#,
            name = html_escape::encode_text(&part.name),
            description = html_escape::encode_text(&part.description),
        ));
        for doc in &part.documents {
            html.push_str(&format!(
                "        <li>{}</li>\n",
                html_escape::encode_text(&doc.title)
            ));
        }
        html.push_str("      </ul>\n    </div>\n");
    }

    html.push_str("  </div>\n");
    html
}
