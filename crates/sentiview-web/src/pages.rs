//! Server-rendered HTML pages.

use sentiview_common::SentimentResult;

/// Public URLs of the two chart images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLinks {
    /// Pie chart URL.
    pub pie: String,
    /// Bar chart URL.
    pub bar: String,
}

impl ChartLinks {
    /// Builds URLs for files served under `prefix`.
    pub fn new(prefix: &str, pie_file: &str, bar_file: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            pie: format!("{prefix}/{pie_file}"),
            bar: format!("{prefix}/{bar_file}"),
        }
    }
}

/// Form page, with results and charts when a submission was analyzed.
pub fn index_page(text: &str, results: &[SentimentResult], charts: Option<&ChartLinks>) -> String {
    let body = format!(
        r#"<h1>Sentiment Analysis</h1>
    <form method="post" action="/">
        <textarea name="text" rows="8" cols="80" placeholder="One sentence per line">{text}</textarea>
        <br>
        <button type="submit">Analyze</button>
    </form>
    {results}
    {charts}"#,
        text = html_escape(text),
        results = render_results(results),
        charts = charts.map(render_charts).unwrap_or_default(),
    );
    layout("Sentiment Analysis", &body)
}

/// Page showing the most recently written charts.
pub fn charts_page(charts: &ChartLinks) -> String {
    let body = format!(
        r#"<h1>Sentiment Charts</h1>
    {charts}
    <p><a href="/">Back to the analyzer</a></p>"#,
        charts = render_charts(charts),
    );
    layout("Sentiment Charts", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    {body}
</body>
</html>"#,
        title = html_escape(title),
        css = inline_css(),
    )
}

fn render_results(results: &[SentimentResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let items: String = results
        .iter()
        .map(|result| {
            let emoji = result
                .emoji
                .as_deref()
                .map(|e| format!(r#"<span class="emoji">{}</span> "#, html_escape(e)))
                .unwrap_or_default();
            format!(
                r#"
        <li class="result" style="border-left-color: {color}">{emoji}<strong style="color: {color}">{label}</strong>: {text}</li>"#,
                color = html_escape(&result.color),
                label = result.label,
                text = html_escape(&result.text),
            )
        })
        .collect();

    format!(
        r#"<h2>Results</h2>
    <ul class="results">{items}
    </ul>"#
    )
}

fn render_charts(charts: &ChartLinks) -> String {
    format!(
        r#"<div class="charts">
        <img src="{pie}" alt="Sentiment distribution pie chart">
        <img src="{bar}" alt="Sentiment counts bar chart">
    </div>"#,
        pie = html_escape(&charts.pie),
        bar = html_escape(&charts.bar),
    )
}

fn inline_css() -> &'static str {
    "body { font-family: sans-serif; max-width: 960px; margin: 2em auto; padding: 0 1em; }
    textarea { width: 100%; font-size: 1em; }
    ul.results { list-style: none; padding: 0; }
    li.result { border-left: 6px solid; padding: 0.4em 0.8em; margin: 0.4em 0; background: #fafafa; }
    .charts img { max-width: 48%; margin: 0.5em 1%; }"
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiview_common::SentimentLabel;

    #[test]
    fn test_chart_links() {
        let links = ChartLinks::new("/static", "pie_chart.png", "bar_chart.png");
        assert_eq!(links.pie, "/static/pie_chart.png");
        assert_eq!(links.bar, "/static/bar_chart.png");
        assert_eq!(ChartLinks::new("/assets/", "p.png", "b.png").pie, "/assets/p.png");
    }

    #[test]
    fn test_empty_index_has_form_only() {
        let page = index_page("", &[], None);
        assert!(page.contains(r#"<textarea name="text""#));
        assert!(!page.contains("<h2>Results</h2>"));
        assert!(!page.contains("<img"));
    }

    #[test]
    fn test_results_are_escaped_and_colored() {
        let results = vec![
            SentimentResult::with_emoji("<b>great</b> & fun", SentimentLabel::Positive, 0.7),
            SentimentResult::without_emoji("meh", SentimentLabel::Neutral, 0.0),
        ];
        let links = ChartLinks::new("/static", "pie_chart.png", "bar_chart.png");
        let page = index_page("<b>great</b> & fun\nmeh", &results, Some(&links));

        assert!(page.contains("&lt;b&gt;great&lt;/b&gt; &amp; fun"));
        assert!(!page.contains("<b>great</b>"));
        assert!(page.contains("😊"));
        assert!(page.contains("#4CAF50"));
        assert!(page.contains("#2196F3"));
        assert!(page.contains(r#"src="/static/pie_chart.png""#));
        assert!(page.contains(r#"src="/static/bar_chart.png""#));
    }

    #[test]
    fn test_charts_page_references_images() {
        let page = charts_page(&ChartLinks::new("/static", "pie_chart.png", "bar_chart.png"));
        assert!(page.contains("/static/pie_chart.png"));
        assert!(page.contains("/static/bar_chart.png"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
