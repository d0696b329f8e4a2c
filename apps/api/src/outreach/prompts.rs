// Prompt templates for outreach drafting.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{
    DRAFT_CONSTRAINTS, JSON_DRAFT_INSTRUCTION, NO_COMMENTARY_INSTRUCTION,
};
use crate::outreach::{BrandBrief, OutreachDraft, Prospect};

/// First-draft prompt.
/// Replace: {json_instruction}, {brand_name}, {positioning}, {prospect},
///          {language}, {tone}, {constraints}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are writing short B2B outreach for a furniture/lighting supplier.
{json_instruction}

Brand:
- name: {brand_name}
- positioning: {positioning}

Prospect:
{prospect}

Constraints:
- output language: {language}
- tone: {tone}
{constraints}"#;

/// Refinement prompt.
/// Replace: {json_instruction}, {language}, {tone}, {brand_name}, {positioning},
///          {prospect}, {current_subject}, {current_body}, {feedback}, {no_commentary}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"You are refining B2B outreach for a furniture/lighting supplier.
{json_instruction}

Language: {language}
Tone: {tone}

Brand:
- name: {brand_name}
- positioning: {positioning}

Prospect:
{prospect}

Current draft:
- subject: {current_subject}
- body: {current_body}

Feedback to apply:
{feedback}

Constraints:
- keep subject under 70 chars
- keep body under 120 words
- preserve concrete value proposition
- include one clear CTA
{no_commentary}"#;

fn prospect_block(prospect: &Prospect<'_>) -> String {
    format!(
        "- company: {}\n- city/state: {}, {}\n- services: {}\n- description: {}",
        prospect.company_name,
        prospect.city,
        prospect.state,
        prospect.services,
        prospect.description
    )
}

pub fn build_generation_prompt(brief: &BrandBrief<'_>, prospect: &Prospect<'_>) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{json_instruction}", JSON_DRAFT_INSTRUCTION)
        .replace("{brand_name}", brief.brand_name)
        .replace("{positioning}", brief.positioning)
        .replace("{language}", brief.language.prompt_name())
        .replace("{tone}", brief.tone)
        .replace("{constraints}", DRAFT_CONSTRAINTS)
        .replace("{prospect}", &prospect_block(prospect))
        .trim()
        .to_string()
}

pub fn build_refine_prompt(
    brief: &BrandBrief<'_>,
    prospect: &Prospect<'_>,
    current: &OutreachDraft,
    feedback: &str,
) -> String {
    REFINE_PROMPT_TEMPLATE
        .replace("{json_instruction}", JSON_DRAFT_INSTRUCTION)
        .replace("{language}", brief.language.prompt_name())
        .replace("{no_commentary}", NO_COMMENTARY_INSTRUCTION)
        .replace("{tone}", brief.tone)
        .replace("{brand_name}", brief.brand_name)
        .replace("{positioning}", brief.positioning)
        .replace("{prospect}", &prospect_block(prospect))
        .replace("{current_subject}", &current.subject)
        .replace("{current_body}", &current.body)
        .replace("{feedback}", feedback)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Language;

    fn brief(language: Language) -> BrandBrief<'static> {
        BrandBrief {
            brand_name: "Sunny Home",
            positioning: "Mid-to-high-end furniture and lighting.",
            tone: "practical",
            language,
        }
    }

    fn prospect() -> Prospect<'static> {
        Prospect {
            company_name: "Atlas Interiors",
            city: "Austin",
            state: "TX",
            services: "interior design",
            description: "Boutique hotel projects",
        }
    }

    #[test]
    fn test_generation_prompt_fills_every_placeholder() {
        let prompt = build_generation_prompt(&brief(Language::En), &prospect());
        assert!(prompt.contains("- company: Atlas Interiors"));
        assert!(prompt.contains("- city/state: Austin, TX"));
        assert!(prompt.contains("- output language: English"));
        assert!(prompt.contains("keep subject under 70 chars"));
        assert!(!prompt.contains("{brand_name}"));
        assert!(!prompt.contains("{prospect}"));
    }

    #[test]
    fn test_generation_prompt_target_language_cn() {
        let prompt = build_generation_prompt(&brief(Language::Cn), &prospect());
        assert!(prompt.contains("Simplified Chinese"));
    }

    #[test]
    fn test_refine_prompt_includes_draft_and_feedback() {
        let current = OutreachDraft {
            subject: "Old subject".to_string(),
            body: "Old body".to_string(),
        };
        let prompt = build_refine_prompt(&brief(Language::En), &prospect(), &current, "Shorter");
        assert!(prompt.contains("- subject: Old subject"));
        assert!(prompt.contains("- body: Old body"));
        assert!(prompt.contains("Feedback to apply:\nShorter"));
        assert!(prompt.contains("no markdown fences"));
        assert!(!prompt.contains("{feedback}"));
    }

    #[test]
    fn test_feedback_with_braces_is_left_alone() {
        let current = OutreachDraft {
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        let prompt = build_refine_prompt(&brief(Language::En), &prospect(), &current, "mention {tone}");
        assert!(prompt.contains("mention {tone}"));
    }
}
