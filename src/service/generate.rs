use serde::{Deserialize, Serialize};

use crate::model::{GenerateResponse, InputField, MetaTagInput};

/// Field-scoped validation messages. Recomputed in full by [`validate`];
/// cleared one field at a time as the user edits. Only title, description,
/// and keywords ever carry an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.keywords.is_none()
    }

    /// Optimistic on-edit clearing: drops exactly one field's error without
    /// re-running validation. A no-op for never-validated fields.
    pub fn clear(&mut self, field: InputField) {
        match field {
            InputField::Title => self.title = None,
            InputField::Description => self.description = None,
            InputField::Keywords => self.keywords = None,
            _ => {}
        }
    }
}

/// Apply a single form edit: store the new value and clear that field's
/// error, leaving the rest of the error map untouched.
pub fn apply_edit(
    input: &mut MetaTagInput,
    errors: &mut ValidationErrors,
    field: InputField,
    value: String,
) {
    match field {
        InputField::Title => input.title = value,
        InputField::Description => input.description = value,
        InputField::Keywords => input.keywords = value,
        InputField::Author => input.author = value,
        InputField::OgTitle => input.og_title = value,
        InputField::OgDescription => input.og_description = value,
        InputField::OgImage => input.og_image = value,
        InputField::TwitterCard => input.twitter_card = value,
        InputField::Robots => input.robots = value,
    }
    errors.clear(field);
}

/// Length bounds apply only when the field is filled in; keywords are the
/// one hard requirement. The 120-160 description bound intentionally
/// differs from the analyzer's 120-155 scoring range.
pub fn validate(input: &MetaTagInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let title_len = input.title.chars().count();
    if title_len > 0 && !(50..=60).contains(&title_len) {
        errors.title = Some("Title should be between 50-60 characters".to_string());
    }

    let description_len = input.description.chars().count();
    if description_len > 0 && !(120..=160).contains(&description_len) {
        errors.description = Some("Description should be between 120-160 characters".to_string());
    }

    if input.keywords.trim().is_empty() {
        errors.keywords = Some("Keywords are required".to_string());
    }

    errors
}

/// Render the meta tag block. Empty until title, description, and keywords
/// are all filled in. Values are interpolated verbatim, without escaping;
/// when `og_image` is empty the image lines render as blank lines rather
/// than disappearing, keeping the block's line positions stable.
pub fn render_tags(input: &MetaTagInput) -> String {
    if input.title.is_empty() || input.description.is_empty() || input.keywords.is_empty() {
        return String::new();
    }

    let og_title = if input.og_title.is_empty() {
        &input.title
    } else {
        &input.og_title
    };
    let og_description = if input.og_description.is_empty() {
        &input.description
    } else {
        &input.og_description
    };

    let og_image_line = if input.og_image.is_empty() {
        String::new()
    } else {
        format!(r#"<meta property="og:image" content="{}">"#, input.og_image)
    };
    let twitter_image_line = if input.og_image.is_empty() {
        String::new()
    } else {
        format!(
            r#"<meta property="twitter:image" content="{}">"#,
            input.og_image
        )
    };

    format!(
        r#"<!-- Primary Meta Tags -->
<title>{title}</title>
<meta name="title" content="{title}">
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta name="author" content="{author}">
<meta name="robots" content="{robots}">

<!-- Open Graph / Facebook -->
<meta property="og:type" content="website">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{og_description}">
{og_image_line}

<!-- Twitter -->
<meta property="twitter:card" content="{twitter_card}">
<meta property="twitter:title" content="{og_title}">
<meta property="twitter:description" content="{og_description}">
{twitter_image_line}"#,
        title = input.title,
        description = input.description,
        keywords = input.keywords,
        author = input.author,
        robots = input.robots,
        twitter_card = input.twitter_card,
    )
}

/// The copy gate: validate first, hand out the rendered block only when the
/// form is clean and renders non-empty.
pub fn generate(input: &MetaTagInput) -> GenerateResponse {
    let errors = validate(input);
    if !errors.is_empty() {
        return GenerateResponse { tags: None, errors };
    }

    let rendered = render_tags(input);
    let tags = if rendered.is_empty() {
        None
    } else {
        Some(rendered)
    };

    GenerateResponse { tags, errors }
}
