//! Offline model comparison: sends the same outreach prompt for the top-ranked
//! leads to several models and records latency, output sizes and failures.
//!
//! Uses the production scoring engine and generation prompt, so results
//! reflect what the API would send.

pub mod report;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::leads::ingest::parse_leads;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::outreach::prompts::build_generation_prompt;
use crate::outreach::writer::field_text;
use crate::outreach::{BrandBrief, Prospect};
use crate::scoring::{render_reasons, score_record, Language, TargetRegions};

pub use report::{write_csv, write_markdown};

pub const TEMPERATURE: f32 = 0.3;

/// A scored lead as fed to every model under test.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalLead {
    pub company_name: String,
    pub city: String,
    pub state: String,
    pub services: String,
    pub description: String,
    pub score: i32,
    pub reason: String,
}

impl<'a> From<&'a EvalLead> for Prospect<'a> {
    fn from(lead: &'a EvalLead) -> Self {
        Self {
            company_name: &lead.company_name,
            city: &lead.city,
            state: &lead.state,
            services: &lead.services,
            description: &lead.description,
        }
    }
}

/// One request: one model, one lead.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    pub model: String,
    pub company_name: String,
    pub lead_score: i32,
    pub lead_reason: String,
    pub latency_ms: f64,
    pub subject: String,
    pub body: String,
    pub subject_len: usize,
    pub body_len: usize,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub model: String,
    pub requests: usize,
    pub success: usize,
    /// Percent, one decimal.
    pub success_rate: f64,
    pub avg_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub avg_subject_len: f64,
    pub avg_body_len: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// Scores the CSV at `path` and keeps the `top_n` highest-scoring leads.
pub fn read_top_leads(
    path: &Path,
    targets: &TargetRegions,
    language: Language,
    top_n: usize,
) -> Result<Vec<EvalLead>> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_leads(&content)?;

    let mut leads: Vec<EvalLead> = records
        .into_iter()
        .map(|record| {
            let scored = score_record(&record, targets, language);
            EvalLead {
                score: scored.breakdown.total(),
                reason: render_reasons(&scored.reasons, language),
                company_name: record.company_name,
                city: record.city,
                state: record.state,
                services: record.services,
                description: record.description,
            }
        })
        .collect();

    leads.sort_by(|a, b| b.score.cmp(&a.score));
    leads.truncate(top_n);
    Ok(leads)
}

// ────────────────────────────────────────────────────────────────────────────
// Run
// ────────────────────────────────────────────────────────────────────────────

pub async fn run_model_test(
    generator: &dyn TextGenerator,
    model: &str,
    leads: &[EvalLead],
    brief: &BrandBrief<'_>,
) -> (Vec<DetailRow>, ModelSummary) {
    let mut rows = Vec::with_capacity(leads.len());

    for lead in leads {
        let prompt = build_generation_prompt(brief, &Prospect::from(lead));
        let start = Instant::now();

        let (subject, body, error) = match generator.complete(model, &prompt, Some(TEMPERATURE)).await
        {
            Ok(text) => {
                let (subject, body) = parse_json_response(&text);
                (subject, body, String::new())
            }
            // An empty reply is a failed draft, not a failed request.
            Err(LlmError::EmptyContent) => (String::new(), String::new(), String::new()),
            Err(e) => {
                warn!("{model} failed for {}: {e}", lead.company_name);
                (String::new(), String::new(), e.to_string())
            }
        };
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        rows.push(DetailRow {
            model: model.to_string(),
            company_name: lead.company_name.clone(),
            lead_score: lead.score,
            lead_reason: lead.reason.clone(),
            latency_ms: round1(latency_ms),
            subject_len: subject.chars().count(),
            body_len: body.chars().count(),
            subject,
            body,
            error,
        });
    }

    let summary = summarize_model(model, &rows);
    info!(
        "{model}: {}/{} drafts, avg {} ms, p95 {} ms",
        summary.success, summary.requests, summary.avg_latency_ms, summary.p95_latency_ms
    );
    (rows, summary)
}

pub fn summarize_model(model: &str, rows: &[DetailRow]) -> ModelSummary {
    let success = rows
        .iter()
        .filter(|r| !r.subject.is_empty() && !r.body.is_empty())
        .count();
    let latencies: Vec<f64> = rows.iter().map(|r| r.latency_ms).collect();

    ModelSummary {
        model: model.to_string(),
        requests: rows.len(),
        success,
        success_rate: if rows.is_empty() {
            0.0
        } else {
            round1(success as f64 / rows.len() as f64 * 100.0)
        },
        avg_latency_ms: round1(mean(&latencies)),
        p95_latency_ms: round1(p95(&latencies)),
        avg_subject_len: round1(mean(
            &rows.iter().map(|r| r.subject_len as f64).collect::<Vec<_>>(),
        )),
        avg_body_len: round1(mean(
            &rows.iter().map(|r| r.body_len as f64).collect::<Vec<_>>(),
        )),
    }
}

/// Reads `{subject, body}` from model output. Unlike the API writer, JSON
/// fields are taken as-is and non-JSON text always gets the line split.
/// Returns empty strings when nothing usable is found.
pub fn parse_json_response(text: &str) -> (String, String) {
    let cleaned = strip_json_fences(text);
    if cleaned.is_empty() {
        return (String::new(), String::new());
    }

    if cleaned.starts_with('{') {
        if let Ok(payload) = serde_json::from_str::<Value>(cleaned) {
            return (field_text(&payload, "subject"), field_text(&payload, "body"));
        }
    }

    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    match lines.split_first() {
        Some((first, rest)) if !rest.is_empty() => (first.to_string(), rest.join("\n")),
        _ => (String::new(), String::new()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stats
// ────────────────────────────────────────────────────────────────────────────

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Nearest-rank style: `sorted[max(0, floor(n * 0.95) - 1)]`.
fn p95(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = (sorted.len() as f64 * 0.95).floor() as usize;
    sorted[rank.saturating_sub(1)]
}
