//! AI outreach writer: turns a brand brief and a prospect into a draft via
//! the configured text generator.
//!
//! Failures never propagate: a missing or unparseable response yields `None`
//! and the caller keeps whatever draft it already had.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::outreach::prompts::{build_generation_prompt, build_refine_prompt};
use crate::outreach::{BrandBrief, OutreachDraft, Prospect};

const TEMPERATURE: f32 = 0.2;
const MAX_SUBJECT_CHARS: usize = 70;

#[derive(Clone)]
pub struct OutreachWriter {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl OutreachWriter {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(
        &self,
        brief: &BrandBrief<'_>,
        prospect: &Prospect<'_>,
    ) -> Option<OutreachDraft> {
        let prompt = build_generation_prompt(brief, prospect);
        let text = self.complete(&prompt, prospect.company_name).await?;
        let draft = parse_draft(&text, true);
        if draft.is_none() {
            warn!(
                "Unusable outreach draft for {} from model {}",
                prospect.company_name, self.model
            );
        }
        draft
    }

    pub async fn refine(
        &self,
        brief: &BrandBrief<'_>,
        prospect: &Prospect<'_>,
        current: &OutreachDraft,
        feedback: &str,
    ) -> Option<OutreachDraft> {
        let prompt = build_refine_prompt(brief, prospect, current, feedback);
        let text = self.complete(&prompt, prospect.company_name).await?;
        parse_draft(&text, false)
    }

    async fn complete(&self, prompt: &str, company: &str) -> Option<String> {
        match self
            .generator
            .complete(&self.model, prompt, Some(TEMPERATURE))
            .await
        {
            Ok(text) => {
                debug!("Outreach model returned {} chars for {}", text.len(), company);
                Some(text)
            }
            Err(e) => {
                warn!("Outreach generation failed for {company}: {e}");
                None
            }
        }
    }
}

/// Reads `{subject, body}` JSON. With `line_fallback`, non-JSON text is read as
/// "first line is the subject, the rest is the body".
pub(crate) fn parse_draft(text: &str, line_fallback: bool) -> Option<OutreachDraft> {
    let cleaned = strip_json_fences(text);
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.starts_with('{') {
        let payload: Value = serde_json::from_str(cleaned).ok()?;
        let subject = field_text(&payload, "subject");
        let body = field_text(&payload, "body");
        if !subject.is_empty() && !body.is_empty() {
            return Some(OutreachDraft { subject, body });
        }
    }

    if !line_fallback {
        return None;
    }

    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    match lines.split_first() {
        Some((first, rest)) if !rest.is_empty() => Some(OutreachDraft {
            subject: first.chars().take(MAX_SUBJECT_CHARS).collect(),
            body: rest.join("\n"),
        }),
        _ => None,
    }
}

pub(crate) fn field_text(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::scoring::Language;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedGenerator {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn complete(
            &self,
            _model: &str,
            prompt: &str,
            _temperature: Option<f32>,
        ) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    fn brief() -> BrandBrief<'static> {
        BrandBrief {
            brand_name: "Sunny Home",
            positioning: "Furniture and lighting",
            tone: "practical",
            language: Language::En,
        }
    }

    fn prospect() -> Prospect<'static> {
        Prospect {
            company_name: "Atlas",
            city: "Austin",
            state: "TX",
            services: "",
            description: "",
        }
    }

    #[test]
    fn test_parse_json_draft() {
        let draft = parse_draft("{\"subject\": \" Hi \", \"body\": \"Body\"}", true).unwrap();
        assert_eq!(draft.subject, "Hi");
        assert_eq!(draft.body, "Body");
    }

    #[test]
    fn test_parse_fenced_json_draft() {
        let text = "```json\n{\"subject\": \"S\", \"body\": \"B\"}\n```";
        assert_eq!(parse_draft(text, false).unwrap().subject, "S");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(parse_draft("{not json\nsecond line", true).is_none());
    }

    #[test]
    fn test_line_fallback_truncates_subject() {
        let long_subject = "x".repeat(90);
        let text = format!("{long_subject}\n\nline one\n  line two  ");
        let draft = parse_draft(&text, true).unwrap();
        assert_eq!(draft.subject.chars().count(), 70);
        assert_eq!(draft.body, "line one\nline two");
    }

    #[test]
    fn test_line_fallback_disabled_for_refine() {
        assert!(parse_draft("Subject\nBody", false).is_none());
    }

    #[test]
    fn test_json_missing_body_falls_back_to_lines() {
        let text = "{\"subject\": \"S\",\n\"body\": \"\"}";
        let draft = parse_draft(text, true).unwrap();
        assert_eq!(draft.subject, "{\"subject\": \"S\",");
    }

    #[test]
    fn test_single_line_is_rejected() {
        assert!(parse_draft("only a subject", true).is_none());
        assert!(parse_draft("   ", true).is_none());
    }

    #[tokio::test]
    async fn test_generate_uses_generator_reply() {
        let generator = CannedGenerator::replying("{\"subject\":\"S\",\"body\":\"B\"}");
        let writer = OutreachWriter::new(generator.clone(), "test-model");
        let draft = writer.generate(&brief(), &prospect()).await.unwrap();
        assert_eq!(draft.body, "B");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("- company: Atlas"));
    }

    #[tokio::test]
    async fn test_generator_error_yields_none() {
        let writer = OutreachWriter::new(CannedGenerator::failing(), "test-model");
        assert!(writer.generate(&brief(), &prospect()).await.is_none());
        let current = OutreachDraft {
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        assert!(writer
            .refine(&brief(), &prospect(), &current, "shorter")
            .await
            .is_none());
    }
}
