use axum::{extract::State, Json};

use crate::{
    app::AppState,
    error::AppResult,
    model::{AnalyzeRequest, AnalyzeResponse},
    service,
};

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let response = service::analyze::run(&state, payload.url).await?;
    Ok(Json(response))
}
