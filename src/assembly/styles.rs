//! Print stylesheet for the combined document.
//!
//! Cover, table of contents and part dividers each force page breaks so the
//! converter's pagination lines up with the book structure. Every top-level
//! heading inside an article also starts a new page, except the very first one
//! in the document.

/// The stylesheet inlined into the combined document's head.
pub fn stylesheet() -> &'static str {
    STYLESHEET
}

const STYLESHEET: &str = r#"
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
      max-width: 900px;
      margin: 40px auto;
      padding: 0 20px;
      line-height: 1.6;
    }

    /* Cover page */
    .cover-page {
      text-align: center;
      padding: 100px 0;
      page-break-after: always;
    }
    .cover-page h1 {
      font-size: 3em;
      color: #2563eb;
      margin-bottom: 0.5em;
    }
    .cover-page .subtitle {
      font-size: 1.5em;
      color: #64748b;
      margin-bottom: 2em;
    }
    .cover-page .meta {
      color: #64748b;
      font-size: 0.9em;
    }

    /* Table of contents */
    .toc {
      page-break-after: always;
      margin: 40px 0;
    }
    .toc h1 {
      color: #2563eb;
      border-bottom: 2px solid #e2e8f0;
      padding-bottom: 10px;
    }
    .toc-category {
      margin: 30px 0;
    }
    .toc-category h2 {
      color: #1e293b;
      font-size: 1.5em;
      margin-bottom: 10px;
    }
    .toc-category .description {
      color: #64748b;
      font-style: italic;
      margin-bottom: 15px;
    }
    .toc-category ul {
      list-style: none;
      padding-left: 20px;
    }
    .toc-category li {
      margin: 8px 0;
      color: #475569;
    }

    /* Part dividers */
    .part-divider {
      page-break-before: always;
      text-align: center;
      padding: 150px 0;
      page-break-after: always;
    }
    .part-divider h1 {
      font-size: 3em;
      color: #2563eb;
      margin-bottom: 0.3em;
    }
    .part-divider .description {
      font-size: 1.2em;
      color: #64748b;
    }

    /* Article content */
    h1 {
      color: #2563eb;
      border-bottom: 2px solid #e2e8f0;
      padding-bottom: 10px;
      margin-top: 40px;
      page-break-before: always;
    }
    h1:first-of-type {
      page-break-before: avoid;
    }
    h2 {
      color: #1e293b;
      margin-top: 30px;
      border-bottom: 1px solid #f1f5f9;
      padding-bottom: 8px;
    }
    h3 {
      color: #334155;
      margin-top: 25px;
    }
    code {
      background: #f8fafc;
      padding: 2px 6px;
      border-radius: 4px;
      font-size: 0.9em;
      font-family: 'Courier New', monospace;
    }
    pre {
      background: #f8fafc;
      padding: 15px;
      border-radius: 8px;
      overflow-x: auto;
      border: 1px solid #e2e8f0;
      margin: 15px 0;
    }
    pre code {
      background: none;
      padding: 0;
    }
    a {
      color: #2563eb;
      text-decoration: none;
    }
    table {
      border-collapse: collapse;
      width: 100%;
      margin: 20px 0;
      page-break-inside: avoid;
    }
    th, td {
      border: 1px solid #e2e8f0;
      padding: 10px;
      text-align: left;
    }
    th {
      background: #f8fafc;
      font-weight: 600;
    }
    blockquote {
      border-left: 4px solid #2563eb;
      padding-left: 20px;
      margin: 20px 0;
      color: #64748b;
      font-style: italic;
    }
    ul, ol {
      margin: 15px 0;
      padding-left: 30px;
    }
    li {
      margin: 8px 0;
    }

    /* Source file header */
    .doc-header {
      background: #f8fafc;
      padding: 15px 20px;
      border-radius: 8px;
      margin-bottom: 30px;
      border-left: 4px solid #2563eb;
    }
    .doc-header .filename {
      font-family: 'Courier New', monospace;
      color: #64748b;
      font-size: 0.9em;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_book_structure() {
        let css = stylesheet();
        for selector in [".cover-page {", ".toc {", ".part-divider {", ".doc-header {"] {
            assert!(css.contains(selector), "missing {selector}");
        }
        assert!(!css.contains("</style>"));
    }
}
