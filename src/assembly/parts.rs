//! Part dividers and the documents that follow them.

use crate::categories::Category;
use crate::document::Document;

/// Render part `number` (1-based): its divider page, then each document.
pub fn render(number: usize, part: &Category<Document>) -> String {
    let mut html = format!(
        r#"
  <div class="part-divider">
    <h1>Part {number}</h1>
    <h1>{name}</h1>
    <div class="description">{description}</div>
  </div>
"#,
        name = html_escape::encode_text(&part.name),
        description = html_escape::encode_text(&part.description),
    );

    for doc in &part.documents {
        html.push_str(&format!(
            r#"
  <div class="doc-header">
    <div class="filename">{filename}</div>
  </div>
"#,
            filename = html_escape::encode_text(&doc.filename),
        ));
        // verbatim: no rewriting of links or image paths
        html.push_str(&doc.article);
        html.push('\n');
    }

    html
}
