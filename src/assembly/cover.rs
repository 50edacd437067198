//! Cover page.

use super::Cover;

/// Render the cover page, which counts the documents bound into the book.
pub fn render(cover: &Cover, document_count: usize) -> String {
    let byline = if cover.byline.is_empty() {
        String::new()
    } else {
        format!(
            "      <p>Brought to you by <strong>{}</strong></p>\n",
            html_escape::encode_text(&cover.byline)
        )
    };

    format!(
        r#"  <div class="cover-page">
    <h1>{title}</h1>
    <div class="subtitle">{subtitle}</div>
    <div class="meta">
      <p>Generated: {date}</p>
      <p>Total Documents: {document_count}</p>
{byline}    </div>
  </div>
"#,
        title = html_escape::encode_text(&cover.title),
        subtitle = html_escape::encode_text(&cover.subtitle),
        date = long_date(cover),
    )
}

/// e.g. "October 16, 2026"
fn long_date(cover: &Cover) -> String {
    cover.generated.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cover(byline: &str) -> Cover {
        Cover {
            title: "Docs & More".to_string(),
            subtitle: "Sub".to_string(),
            byline: byline.to_string(),
            generated: NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date"),
        }
    }

    #[test]
    fn date_is_long_form() {
        let html = render(&cover(""), 3);
        assert!(html.contains("<p>Generated: March 5, 2026</p>"));
        assert!(html.contains("<p>Total Documents: 3</p>"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render(&cover(""), 0);
        assert!(html.contains("<h1>Docs &amp; More</h1>"));
    }

    #[test]
    fn byline_is_optional() {
        assert!(!render(&cover(""), 0).contains("Brought to you by"));
        assert!(render(&cover("Neighborhood Lab"), 0)
            .contains("Brought to you by <strong>Neighborhood Lab</strong>"));
    }
}
