use ns_core::{Article, Sentiment};
use ns_storage::PageView;

pub fn sentiment_badge(sentiment: Option<Sentiment>) -> &'static str {
    match sentiment.unwrap_or(Sentiment::Neutral) {
        Sentiment::Positive => "Sentiment: Positive 😃",
        Sentiment::Negative => "Sentiment: Negative 😠",
        Sentiment::Neutral => "Sentiment: Neutral 😐",
    }
}

pub fn render_article(article: &Article) -> String {
    let mut lines = vec![
        "─".repeat(60),
        format!("📰 {}", article.title),
        sentiment_badge(article.sentiment).to_string(),
    ];
    match article.description.as_deref() {
        Some(description) if !description.is_empty() => lines.push(description.to_string()),
        _ => lines.push("No description available.".to_string()),
    }
    let source = if article.source.name.is_empty() {
        "Unknown Source"
    } else {
        article.source.name.as_str()
    };
    lines.push(format!(
        "Source: {} | Published: {}",
        source,
        article.published_display()
    ));
    lines.push(format!("Read full article ↗️  {}", article.url));
    match article.url_to_image.as_deref() {
        Some(image) if !image.is_empty() => lines.push(format!("Image: {}", image)),
        _ => lines.push("No Image Available".to_string()),
    }
    lines.join("\n")
}

pub fn render_page(view: &PageView) -> String {
    let mut out: Vec<String> = view.articles.iter().map(render_article).collect();
    out.push("─".repeat(60));
    out.push(format!("Page {} of {}", view.page, view.total_pages));
    out.join("\n")
}
