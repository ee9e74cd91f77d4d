use axum::Json;

use crate::{
    model::{EditRequest, EditResponse, GenerateResponse, MetaTagInput, PreviewResponse},
    service,
};

/// Live preview: pure render, recomputed on every edit. Empty until the
/// required fields are filled in.
pub async fn preview(Json(input): Json<MetaTagInput>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        tags: service::generate::render_tags(&input),
    })
}

/// One form edit: stores the value and optimistically clears that field's
/// error without re-validating the rest.
pub async fn edit(Json(payload): Json<EditRequest>) -> Json<EditResponse> {
    let EditRequest {
        mut input,
        mut errors,
        field,
        value,
    } = payload;
    service::generate::apply_edit(&mut input, &mut errors, field, value);
    Json(EditResponse { input, errors })
}

/// Validation-gated render. Returns the field error map with no tags when
/// validation fails; the client copies the block only on success.
pub async fn generate(Json(input): Json<MetaTagInput>) -> Json<GenerateResponse> {
    Json(service::generate::generate(&input))
}
