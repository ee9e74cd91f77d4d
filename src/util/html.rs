use scraper::{Html, Selector};

/// Raw meta-relevant values pulled out of a page. Absent elements come back
/// as empty strings; values are kept untrimmed so length checks see exactly
/// what the page declares.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub viewport: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
}

/// Lenient parse; whatever scraper recovers from broken markup is analyzed.
pub fn extract_page_meta(html: &str) -> PageMeta {
    let document = Html::parse_document(html);

    PageMeta {
        title: title_text(&document).unwrap_or_default(),
        description: meta_name(&document, "description").unwrap_or_default(),
        keywords: meta_name(&document, "keywords").unwrap_or_default(),
        viewport: meta_name(&document, "viewport").unwrap_or_default(),
        robots: meta_name(&document, "robots").unwrap_or_default(),
        og_title: meta_property(&document, "og:title").unwrap_or_default(),
        og_description: meta_property(&document, "og:description").unwrap_or_default(),
        og_image: meta_property(&document, "og:image").unwrap_or_default(),
    }
}

fn meta_name(doc: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
}

fn meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
}

fn title_text(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_text() {
        let meta = extract_page_meta("<html><head><title>Hello</title></head></html>");
        assert_eq!(meta.title, "Hello");
    }

    #[test]
    fn extracts_named_meta_content() {
        let html = r#"<html><head>
            <meta name="description" content="A page.">
            <meta name="keywords" content="a, b">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <meta name="robots" content="noindex">
        </head></html>"#;
        let meta = extract_page_meta(html);
        assert_eq!(meta.description, "A page.");
        assert_eq!(meta.keywords, "a, b");
        assert_eq!(meta.viewport, "width=device-width, initial-scale=1");
        assert_eq!(meta.robots, "noindex");
    }

    #[test]
    fn extracts_open_graph_properties() {
        let html = r#"<html><head>
            <meta property="og:title" content="T">
            <meta property="og:description" content="D">
            <meta property="og:image" content="https://example.com/i.png">
        </head></html>"#;
        let meta = extract_page_meta(html);
        assert_eq!(meta.og_title, "T");
        assert_eq!(meta.og_description, "D");
        assert_eq!(meta.og_image, "https://example.com/i.png");
    }

    #[test]
    fn missing_elements_default_to_empty() {
        let meta = extract_page_meta("<html><head></head></html>");
        assert_eq!(meta, PageMeta::default());
    }

    #[test]
    fn first_matching_element_wins() {
        let html = r#"<html><head>
            <meta name="description" content="first">
            <meta name="description" content="second">
        </head></html>"#;
        let meta = extract_page_meta(html);
        assert_eq!(meta.description, "first");
    }

    #[test]
    fn values_are_not_trimmed() {
        let html = r#"<html><head><meta name="description" content="  padded  "></head></html>"#;
        let meta = extract_page_meta(html);
        assert_eq!(meta.description, "  padded  ");
    }

    #[test]
    fn tolerates_broken_markup() {
        let meta = extract_page_meta("<html><head><title>Still here</title><met");
        assert_eq!(meta.title, "Still here");
    }
}
