use std::sync::atomic::Ordering;

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    model::{AnalyzeResponse, MetaTagResult, TagStatus},
    util::{
        advice,
        html::{extract_page_meta, PageMeta},
    },
};

/// Fetch the target page through the proxy, pull out its meta fields, and
/// score them. Any fetch or decode failure collapses into the one generic
/// analyze error; the cause only reaches the log.
pub async fn run(state: &AppState, url: String) -> AppResult<AnalyzeResponse> {
    let url = url.trim().to_string();
    if url.is_empty() {
        return Err(AppError::BadRequest("url is required".to_string()));
    }

    let request_id = state.analyze_seq.fetch_add(1, Ordering::Relaxed) + 1;

    let html = state
        .proxy
        .fetch_page(&url)
        .await
        .map_err(AppError::AnalyzeFailed)?;

    let meta = extract_page_meta(&html);
    let (results, overall_score) = score_page(&meta);

    tracing::info!(request_id, %url, overall_score, "analysis complete");

    Ok(AnalyzeResponse {
        request_id,
        overall_score,
        results,
    })
}

/// Score the six inspected fields and average them. Result order is fixed:
/// Title, Description, Keywords, Viewport, Robots, Open Graph.
pub fn score_page(meta: &PageMeta) -> (Vec<MetaTagResult>, u8) {
    let scored = [
        analyze_title(&meta.title),
        analyze_description(&meta.description),
        analyze_keywords(&meta.keywords),
        analyze_viewport(&meta.viewport),
        analyze_robots(&meta.robots),
        analyze_open_graph(meta),
    ];

    let total: u32 = scored.iter().map(|(_, score)| u32::from(*score)).sum();
    let overall = (f64::from(total) / scored.len() as f64).round() as u8;

    let results = scored.into_iter().map(|(result, _)| result).collect();
    (results, overall)
}

fn status_for(score: u8) -> TagStatus {
    match score {
        100 => TagStatus::Good,
        0 => TagStatus::Error,
        _ => TagStatus::Warning,
    }
}

fn analyze_title(title: &str) -> (MetaTagResult, u8) {
    let len = title.chars().count();
    let score = if (50..=60).contains(&len) {
        100
    } else if len > 0 {
        50
    } else {
        0
    };

    let result = MetaTagResult {
        tag: "Title",
        content: title.to_string(),
        status: status_for(score),
        message: format!("Title length: {len} characters"),
        recommendation: advice::TITLE.recommendation,
        example: advice::TITLE.example,
    };
    (result, score)
}

fn analyze_description(description: &str) -> (MetaTagResult, u8) {
    let len = description.chars().count();
    let score = if (120..=155).contains(&len) {
        100
    } else if len > 0 {
        50
    } else {
        0
    };

    let result = MetaTagResult {
        tag: "Description",
        content: description.to_string(),
        status: status_for(score),
        message: format!("Description length: {len} characters"),
        recommendation: advice::DESCRIPTION.recommendation,
        example: advice::DESCRIPTION.example,
    };
    (result, score)
}

// Keywords max out at 70, so the status caps at warning.
fn analyze_keywords(keywords: &str) -> (MetaTagResult, u8) {
    let count = keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .count();
    let score = if count > 0 { 70 } else { 0 };

    let result = MetaTagResult {
        tag: "Keywords",
        content: keywords.to_string(),
        status: status_for(score),
        message: format!("{count} keywords found"),
        recommendation: advice::KEYWORDS.recommendation,
        example: advice::KEYWORDS.example,
    };
    (result, score)
}

fn analyze_viewport(viewport: &str) -> (MetaTagResult, u8) {
    let score = if viewport.contains("width=device-width") {
        100
    } else {
        0
    };

    // The message reports presence; a viewport without width=device-width
    // is "present" yet still scores 0.
    let message = if viewport.is_empty() {
        "Viewport meta tag is missing"
    } else {
        "Viewport meta tag is present"
    };

    let result = MetaTagResult {
        tag: "Viewport",
        content: viewport.to_string(),
        status: status_for(score),
        message: message.to_string(),
        recommendation: advice::VIEWPORT.recommendation,
        example: advice::VIEWPORT.example,
    };
    (result, score)
}

// A missing robots tag is only a warning: default crawler behavior is fine.
fn analyze_robots(robots: &str) -> (MetaTagResult, u8) {
    let score = if robots.is_empty() { 50 } else { 100 };
    let message = if robots.is_empty() {
        "Using default robots behavior"
    } else {
        "Robots meta tag is configured"
    };

    let result = MetaTagResult {
        tag: "Robots",
        content: robots.to_string(),
        status: status_for(score),
        message: message.to_string(),
        recommendation: advice::ROBOTS.recommendation,
        example: advice::ROBOTS.example,
    };
    (result, score)
}

fn analyze_open_graph(meta: &PageMeta) -> (MetaTagResult, u8) {
    let present = [&meta.og_title, &meta.og_description, &meta.og_image]
        .iter()
        .filter(|v| !v.is_empty())
        .count();
    let score = match present {
        3 => 100,
        0 => 0,
        _ => 50,
    };

    let message = if score == 100 {
        "All Open Graph tags present"
    } else {
        "Missing some Open Graph tags"
    };

    let result = MetaTagResult {
        tag: "Open Graph",
        content: format!(
            "Title: {}\nDescription: {}\nImage: {}",
            meta.og_title, meta.og_description, meta.og_image
        ),
        status: status_for(score),
        message: message.to_string(),
        recommendation: advice::OPEN_GRAPH.recommendation,
        example: advice::OPEN_GRAPH.example,
    };
    (result, score)
}
