use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::leads::ingest::{ensure_csv_filename, parse_leads};
use crate::leads::pipeline::{process_leads, ProcessOptions, ProcessResponse};
use crate::outreach::{BrandBrief, OutreachDraft, Prospect};
use crate::scoring::{Language, TargetRegions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    #[serde(default = "default_language")]
    pub language: String,
    pub tone: String,
    pub brand_name: String,
    pub positioning: String,
    pub company_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub services: String,
    #[serde(default)]
    pub description: String,
    pub current_subject: String,
    pub current_message: String,
    pub feedback: String,
}

fn default_language() -> String {
    "EN".to_string()
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub subject: String,
    pub message: String,
}

/// POST /api/process
/// Multipart upload: a `file` CSV part plus optional text options.
pub async fn handle_process(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let mut options = ProcessOptions::default();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid form field '{name}': {e}")))?;
        apply_form_field(&mut options, &name, &value)?;
    }

    let (filename, content) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' upload.".to_string()))?;
    ensure_csv_filename(&filename)?;
    let records = parse_leads(&content)?;
    info!("Processing {} leads from {filename}", records.len());

    let response = process_leads(&records, &options, state.writer.as_ref()).await;
    Ok(Json(response))
}

/// POST /api/refine-outreach
pub async fn handle_refine_outreach(
    State(state): State<AppState>,
    Json(req): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let writer = state.writer.as_ref().ok_or(AppError::AiDisabled)?;
    if req.feedback.trim().is_empty() {
        return Err(AppError::Validation("Feedback is required.".to_string()));
    }

    let brief = BrandBrief {
        brand_name: &req.brand_name,
        positioning: &req.positioning,
        tone: &req.tone,
        language: Language::parse(&req.language),
    };
    let prospect = Prospect {
        company_name: &req.company_name,
        city: &req.city,
        state: &req.state,
        services: &req.services,
        description: &req.description,
    };
    let current = OutreachDraft {
        subject: req.current_subject.clone(),
        body: req.current_message.clone(),
    };

    let draft = writer
        .refine(&brief, &prospect, &current, &req.feedback)
        .await
        .ok_or_else(|| AppError::Llm("Failed to refine outreach draft.".to_string()))?;

    Ok(Json(RefineResponse {
        subject: draft.subject,
        message: draft.body,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Form parsing
// ────────────────────────────────────────────────────────────────────────────

fn apply_form_field(options: &mut ProcessOptions, name: &str, value: &str) -> Result<(), AppError> {
    match name {
        "target_states" => options.targets = TargetRegions::parse(value),
        "brand_name" => options.brand_name = value.to_string(),
        "positioning" => options.positioning = value.to_string(),
        "tone" => options.tone = value.to_string(),
        "language" => options.language = Language::parse(value),
        "use_ai" => options.use_ai = parse_form_bool(value)?,
        "ai_limit" => {
            let limit: i64 = value.trim().parse().map_err(|_| {
                AppError::Validation(format!("ai_limit must be an integer, got '{value}'"))
            })?;
            options.ai_limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        }
        _ => {}
    }
    Ok(())
}

fn parse_form_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Validation(format!(
            "use_ai must be a boolean, got '{other}'"
        ))),
    }
}
