use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    Good,
    Warning,
    Error,
}

/// One analyzed meta element. `recommendation` and `example` are static
/// advisory texts fixed per tag; everything else is derived from the page.
#[derive(Debug, Serialize)]
pub struct MetaTagResult {
    pub tag: &'static str,
    pub content: String,
    pub status: TagStatus,
    pub message: String,
    pub recommendation: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Monotonic per-process token. Overlapping submissions race on the
    /// client; it should keep only the response with the highest id.
    pub request_id: u64,
    pub overall_score: u8,
    pub results: Vec<MetaTagResult>,
}

/// Generator form fields. `twitter_card` and `robots` carry non-empty
/// defaults; the rest start empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaTagInput {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub robots: String,
}

impl Default for MetaTagInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            author: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            twitter_card: "summary_large_image".to_string(),
            robots: "index, follow".to_string(),
        }
    }
}

/// One generator form field, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Title,
    Description,
    Keywords,
    Author,
    OgTitle,
    OgDescription,
    OgImage,
    TwitterCard,
    Robots,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub input: MetaTagInput,
    #[serde(default)]
    pub errors: crate::service::generate::ValidationErrors,
    pub field: InputField,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub input: MetaTagInput,
    pub errors: crate::service::generate::ValidationErrors,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    pub errors: crate::service::generate::ValidationErrors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::generate::ValidationErrors;
    use serde_json::json;

    #[test]
    fn tag_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TagStatus::Good).unwrap(), json!("good"));
        assert_eq!(
            serde_json::to_value(TagStatus::Warning).unwrap(),
            json!("warning")
        );
        assert_eq!(
            serde_json::to_value(TagStatus::Error).unwrap(),
            json!("error")
        );
    }

    #[test]
    fn meta_tag_input_uses_camel_case_on_the_wire() {
        let input: MetaTagInput = serde_json::from_value(json!({
            "ogTitle": "T",
            "ogImage": "https://example.com/i.png",
            "twitterCard": "summary",
        }))
        .unwrap();
        assert_eq!(input.og_title, "T");
        assert_eq!(input.og_image, "https://example.com/i.png");
        assert_eq!(input.twitter_card, "summary");
        // Omitted fields pick up the defaults.
        assert_eq!(input.robots, "index, follow");

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["ogTitle"], json!("T"));
        assert_eq!(value["twitterCard"], json!("summary"));
    }

    #[test]
    fn input_field_names_match_the_form_fields() {
        let field: InputField = serde_json::from_value(json!("ogDescription")).unwrap();
        assert_eq!(field, InputField::OgDescription);
        assert!(serde_json::from_value::<InputField>(json!("og_description")).is_err());
    }

    #[test]
    fn absent_validation_errors_are_not_serialized() {
        let errors = ValidationErrors {
            keywords: Some("Keywords are required".to_string()),
            ..ValidationErrors::default()
        };
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "keywords": "Keywords are required" })
        );
        assert_eq!(
            serde_json::to_value(ValidationErrors::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn generate_response_omits_tags_when_withheld() {
        let response = GenerateResponse {
            tags: None,
            errors: ValidationErrors::default(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "errors": {} })
        );
    }
}
