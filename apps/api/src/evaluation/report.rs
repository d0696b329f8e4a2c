use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::evaluation::{DetailRow, ModelSummary};
use crate::scoring::Language;

const SAMPLES_PER_MODEL: usize = 2;
const BODY_PREVIEW_CHARS: usize = 180;

/// Writes `rows` with a header taken from the row type. Nothing is written
/// for an empty slice.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_markdown(
    path: &Path,
    summaries: &[ModelSummary],
    details: &[DetailRow],
    language: Language,
) -> Result<()> {
    std::fs::write(path, render_markdown(summaries, details, language))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn render_markdown(summaries: &[ModelSummary], details: &[DetailRow], language: Language) -> String {
    let label = |en: &'static str, cn: &'static str| language.pick(en, cn);

    let mut lines = vec![
        label("# Model A/B Test Report", "# 模型 A/B 测试报告").to_string(),
        String::new(),
        format!("- {}: {}", label("Language", "语言"), language.code()),
        String::new(),
        label("## Summary", "## 概览").to_string(),
        String::new(),
        "| Model | Requests | Success | Success Rate | Avg Latency (ms) | P95 Latency (ms) | Avg Subject Len | Avg Body Len |".to_string(),
        "|---|---:|---:|---:|---:|---:|---:|---:|".to_string(),
    ];
    for s in summaries {
        lines.push(format!(
            "| {} | {} | {} | {:.1}% | {:.1} | {:.1} | {:.1} | {:.1} |",
            s.model,
            s.requests,
            s.success,
            s.success_rate,
            s.avg_latency_ms,
            s.p95_latency_ms,
            s.avg_subject_len,
            s.avg_body_len
        ));
    }

    lines.push(String::new());
    lines.push(label("## Sample Outputs", "## 示例输出").to_string());
    lines.push(String::new());

    // Models in first-seen order.
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: BTreeMap<&str, Vec<&DetailRow>> = BTreeMap::new();
    for row in details {
        let entry = grouped.entry(row.model.as_str()).or_default();
        if entry.is_empty() {
            order.push(row.model.as_str());
        }
        entry.push(row);
    }

    for model in order {
        lines.push(format!("### {model}"));
        lines.push(String::new());
        for row in grouped[model].iter().take(SAMPLES_PER_MODEL) {
            let subject = if row.subject.is_empty() {
                "[empty]"
            } else {
                row.subject.as_str()
            };
            let preview: String = row
                .body
                .chars()
                .take(BODY_PREVIEW_CHARS)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            lines.push(format!("- **{}** ({:.1} ms)", row.company_name, row.latency_ms));
            lines.push(format!("  - {}: {subject}", label("Subject", "标题")));
            lines.push(format!("  - {}: {preview}", label("Body", "正文")));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
