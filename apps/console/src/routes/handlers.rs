//! Axum route handlers for the console. Every interaction answers with the
//! re-rendered page.

use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::config::parse_flag;
use crate::console::{execute, Action};
use crate::errors::AppError;
use crate::fields::FormFields;
use crate::models::ResumeUpload;
use crate::render::render_page;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValueForm {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct FlagForm {
    /// Absent when an HTML checkbox is unchecked.
    #[serde(default)]
    pub enabled: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidationForm {
    pub job_id: String,
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let console = state.console.lock().await;
    Html(render_page(&console))
}

/// POST /weights/normalize
pub async fn handle_normalize(
    State(state): State<AppState>,
    Form(form): Form<FlagForm>,
) -> Result<Html<String>, AppError> {
    let on = flag_value(form.enabled.as_deref())?;
    run(&state, Action::SetNormalize(on)).await
}

/// POST /weights/:key/value
pub async fn handle_set_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(form): Form<ValueForm>,
) -> Result<Html<String>, AppError> {
    let raw = form
        .value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("'{}' is not a number", form.value)))?;
    run(&state, Action::SetValue { key, raw }).await
}

/// POST /weights/:key/enabled
pub async fn handle_set_enabled(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(form): Form<FlagForm>,
) -> Result<Html<String>, AppError> {
    let enabled = flag_value(form.enabled.as_deref())?;
    run(&state, Action::SetEnabled { key, enabled }).await
}

/// POST /resume
///
/// Forwards the `resume` file part to the parser and fills the text fields
/// from its suggestions.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let upload = read_resume_part(multipart).await?;
    run(&state, Action::BeginUpload(upload)).await
}

/// POST /recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Html<String>, AppError> {
    run(&state, Action::Submit(fields)).await
}

/// POST /validation
pub async fn handle_toggle_validation(
    State(state): State<AppState>,
    Form(form): Form<ValidationForm>,
) -> Result<Html<String>, AppError> {
    run(&state, Action::ToggleValidation(form.job_id)).await
}

/// Dispatches an action, runs any backend command it produces with the
/// console unlocked, applies the completion and renders the page.
///
/// The backend call and its completion run in a spawned task so a flow
/// always leaves its in-flight state, even when the client goes away and
/// this future is dropped.
async fn run(state: &AppState, action: Action) -> Result<Html<String>, AppError> {
    let command = state.console.lock().await.dispatch(action)?;
    if let Some(command) = command {
        let task_state = state.clone();
        let completion = tokio::spawn(async move {
            let finished = execute(task_state.backend.as_ref(), command).await;
            let mut console = task_state.console.lock().await;
            console.dispatch(finished)
        });
        completion
            .await
            .map_err(|e| AppError::Internal(format!("Backend task failed: {e}")))??;
    }
    let console = state.console.lock().await;
    Ok(Html(render_page(&console)))
}

fn flag_value(raw: Option<&str>) -> Result<bool, AppError> {
    match raw {
        None => Ok(false),
        Some(raw) => parse_flag(raw)
            .ok_or_else(|| AppError::Validation(format!("'{raw}' is not a boolean"))),
    }
}

async fn read_resume_part(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::Validation("No selected file.".to_string()));
        }
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read résumé upload: {e}")))?;
        return Ok(ResumeUpload {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation("No resume file provided.".to_string()))
}
