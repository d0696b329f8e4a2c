//! Batch processing: orchestrates scoring, ranking, drafting and summary.
//!
//! Flow: score each record → tier + reasons + angle → templated draft →
//!       rank by score → optional AI drafts for the top N → summary → report.
//!
//! Scoring is independent per record; only the ranking step needs every
//! result. The AI step is the only slow one and is bounded by `ai_limit`.

use std::collections::BTreeMap;

use chrono::{Local, Utc};
use serde::Serialize;
use tracing::info;

use crate::leads::report::top_leads_markdown;
use crate::models::lead::{LeadRecord, LeadResult};
use crate::outreach::{template_outreach, BrandBrief, OutreachWriter, Prospect};
use crate::scoring::{
    choose_tier, pick_angle, render_reasons, score_record, summarize_regions, Language,
    TargetRegions, Tier,
};

pub const DEFAULT_TARGET_STATES: &str = "AZ,CA,TX,FL,NY";
pub const DEFAULT_BRAND_NAME: &str = "Sunny Home";
pub const DEFAULT_POSITIONING: &str =
    "Mid-to-high-end furniture and lighting for premium projects.";
pub const DEFAULT_TONE: &str = "confident, practical, consultative";
pub const DEFAULT_AI_LIMIT: usize = 10;
/// Leads included in the Markdown digest.
pub const REPORT_TOP_N: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Options / response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub targets: TargetRegions,
    pub brand_name: String,
    pub positioning: String,
    pub tone: String,
    pub language: Language,
    pub use_ai: bool,
    pub ai_limit: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            targets: TargetRegions::parse(DEFAULT_TARGET_STATES),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            positioning: DEFAULT_POSITIONING.to_string(),
            tone: DEFAULT_TONE.to_string(),
            language: Language::En,
            use_ai: false,
            ai_limit: DEFAULT_AI_LIMIT,
        }
    }
}

impl ProcessOptions {
    fn brief(&self) -> BrandBrief<'_> {
        BrandBrief {
            brand_name: &self.brand_name,
            positioning: &self.positioning,
            tone: &self.tone,
            language: self.language,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_leads: usize,
    pub average_score: f64,
    pub tier_a: usize,
    pub tier_b: usize,
    pub tier_c: usize,
    /// `[{"CA": 3}, {"TX": 2}, ...]`
    pub top_states: Vec<BTreeMap<String, usize>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub brand_name: String,
    pub language: Language,
    pub use_ai: bool,
    pub ai_enabled: bool,
    pub leads: Vec<LeadResult>,
    pub summary: Summary,
    pub top_leads_markdown: String,
    /// RFC 3339
    pub generated_at: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub async fn process_leads(
    records: &[LeadRecord],
    options: &ProcessOptions,
    writer: Option<&OutreachWriter>,
) -> ProcessResponse {
    let mut leads: Vec<LeadResult> = records.iter().map(|r| draft_lead(r, options)).collect();

    // Stable: equal scores keep upload order.
    leads.sort_by(|a, b| b.score.cmp(&a.score));

    let writer = writer.filter(|_| options.use_ai);
    if let Some(writer) = writer {
        enrich_top_leads(&mut leads, options, writer).await;
    }

    let summary = summarize(&leads);
    info!(
        "Processed {} leads: avg={} A={} B={} C={}",
        summary.total_leads, summary.average_score, summary.tier_a, summary.tier_b, summary.tier_c
    );

    let top_leads_markdown =
        top_leads_markdown(&leads, REPORT_TOP_N, options.language, &Local::now());

    ProcessResponse {
        brand_name: options.brand_name.clone(),
        language: options.language,
        use_ai: options.use_ai,
        ai_enabled: writer.is_some(),
        leads,
        summary,
        top_leads_markdown,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Scores one record and attaches its templated draft.
pub fn draft_lead(record: &LeadRecord, options: &ProcessOptions) -> LeadResult {
    let language = options.language;
    let scored = score_record(record, &options.targets, language);
    let score = scored.breakdown.total();
    let angle = pick_angle(&scored.normalized_text, language);
    let draft = template_outreach(
        &record.company_name,
        &record.city,
        angle,
        &options.brand_name,
        language,
    );

    LeadResult {
        company_name: record.company_name.clone(),
        city: record.city.clone(),
        state: record.state.clone(),
        website: record.website.clone(),
        source: record.source.clone(),
        services: record.services.clone(),
        description: record.description.clone(),
        score,
        tier: choose_tier(score),
        reason: render_reasons(&scored.reasons, language),
        outreach_subject: draft.subject,
        outreach_message: draft.body,
        breakdown: scored.breakdown.into(),
    }
}

async fn enrich_top_leads(leads: &mut [LeadResult], options: &ProcessOptions, writer: &OutreachWriter) {
    let brief = options.brief();
    let limit = options.ai_limit.min(leads.len());
    let mut replaced = 0;

    for lead in leads.iter_mut().take(limit) {
        let generated = writer.generate(&brief, &Prospect::from(&*lead)).await;
        if let Some(draft) = generated {
            lead.outreach_subject = draft.subject;
            lead.outreach_message = draft.body;
            replaced += 1;
        }
    }

    info!(
        "AI drafts: {replaced}/{limit} leads rewritten with model {}",
        writer.model()
    );
}

pub fn summarize(leads: &[LeadResult]) -> Summary {
    let count_tier = |tier: Tier| leads.iter().filter(|l| l.tier == tier).count();

    let average_score = if leads.is_empty() {
        0.0
    } else {
        let mean = leads.iter().map(|l| f64::from(l.score)).sum::<f64>() / leads.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    let states: Vec<&str> = leads
        .iter()
        .map(|l| l.state.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    let top_states = summarize_regions(&states)
        .into_iter()
        .map(|rc| BTreeMap::from([(rc.region, rc.count)]))
        .collect();

    Summary {
        total_leads: leads.len(),
        average_score,
        tier_a: count_tier(Tier::A),
        tier_b: count_tier(Tier::B),
        tier_c: count_tier(Tier::C),
        top_states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn complete(
            &self,
            _model: &str,
            prompt: &str,
            _temperature: Option<f32>,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if prompt.contains("Bad Co") {
                return Err(LlmError::EmptyContent);
            }
            Ok("{\"subject\":\"AI subject\",\"body\":\"AI body\"}".to_string())
        }
    }

    fn record(name: &str, state: &str, description: &str) -> LeadRecord {
        LeadRecord {
            company_name: name.to_string(),
            state: state.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn records() -> Vec<LeadRecord> {
        vec![
            record("Low Co", "TX", "general contractor"),
            record(
                "Hotel Co",
                "CA",
                "hotel interior design furniture lighting procurement preferred vendor",
            ),
            record("Bad Co", "CA", "staging furniture"),
            record("Auto Co", "", "auto dental"),
        ]
    }

    #[tokio::test]
    async fn test_ranks_by_score_descending() {
        let response = process_leads(&records(), &ProcessOptions::default(), None).await;
        let names: Vec<_> = response.leads.iter().map(|l| l.company_name.as_str()).collect();
        assert_eq!(names, vec!["Hotel Co", "Bad Co", "Low Co", "Auto Co"]);
        let scores: Vec<_> = response.leads.iter().map(|l| l.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_equal_scores_keep_upload_order() {
        let input = vec![record("First", "", ""), record("Second", "", "")];
        let response = process_leads(&input, &ProcessOptions::default(), None).await;
        assert_eq!(response.leads[0].company_name, "First");
        assert_eq!(response.leads[1].company_name, "Second");
    }

    #[tokio::test]
    async fn test_summary_counts_and_states() {
        let response = process_leads(&records(), &ProcessOptions::default(), None).await;
        let summary = &response.summary;
        assert_eq!(summary.total_leads, 4);
        assert_eq!(summary.tier_a + summary.tier_b + summary.tier_c, 4);
        assert_eq!(
            summary.top_states,
            vec![
                BTreeMap::from([("CA".to_string(), 2)]),
                BTreeMap::from([("TX".to_string(), 1)]),
            ]
        );
        assert!(!response.ai_enabled);
        assert!(response.top_leads_markdown.contains("## 1. Hotel Co"));
    }

    #[tokio::test]
    async fn test_templated_draft_and_fallback_reason() {
        let response = process_leads(&records(), &ProcessOptions::default(), None).await;
        let low = response.leads.iter().find(|l| l.company_name == "Low Co").unwrap();
        assert_eq!(low.reason, "General fit");
        assert_eq!(low.tier, Tier::C);
        assert_eq!(low.outreach_subject, "Low Co: B2B furniture + lighting sourcing idea");
        assert!(low.outreach_message.contains("trade pricing and curated"));
    }

    #[tokio::test]
    async fn test_ai_enrichment_limited_to_top_n() {
        let generator = Arc::new(CountingGenerator {
            calls: AtomicUsize::new(0),
        });
        let writer = OutreachWriter::new(generator.clone(), "test-model");
        let options = ProcessOptions {
            use_ai: true,
            ai_limit: 2,
            ..Default::default()
        };
        let response = process_leads(&records(), &options, Some(&writer)).await;

        assert!(response.ai_enabled);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
        assert_eq!(response.leads[0].outreach_subject, "AI subject");
        // Generation failed for the second lead, so it keeps its template.
        assert_eq!(response.leads[1].company_name, "Bad Co");
        assert!(response.leads[1].outreach_subject.starts_with("Bad Co:"));
        assert!(response.leads[2].outreach_subject.starts_with("Low Co:"));
    }

    #[tokio::test]
    async fn test_writer_ignored_without_use_ai() {
        let generator = Arc::new(CountingGenerator {
            calls: AtomicUsize::new(0),
        });
        let writer = OutreachWriter::new(generator.clone(), "test-model");
        let response = process_leads(&records(), &ProcessOptions::default(), Some(&writer)).await;
        assert!(!response.ai_enabled);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_average_score_rounded_to_one_decimal() {
        let options = ProcessOptions::default();
        let leads: Vec<_> = [
            record("A", "", "staging"),
            record("B", "", ""),
            record("C", "", ""),
        ]
        .iter()
        .map(|r| draft_lead(r, &options))
        .collect();
        // staging keyword 9 → scores [9, 0, 0] → mean 3.0
        assert_eq!(summarize(&leads).average_score, 3.0);
    }

    #[tokio::test]
    async fn test_chinese_language_keeps_numbers() {
        let en = process_leads(&records(), &ProcessOptions::default(), None).await;
        let cn_options = ProcessOptions {
            language: Language::Cn,
            ..Default::default()
        };
        let cn = process_leads(&records(), &cn_options, None).await;
        let en_scores: Vec<_> = en.leads.iter().map(|l| (l.score, l.tier)).collect();
        let cn_scores: Vec<_> = cn.leads.iter().map(|l| (l.score, l.tier)).collect();
        assert_eq!(en_scores, cn_scores);
        assert!(cn.leads[0].outreach_subject.contains("家具与灯具"));
    }
}
