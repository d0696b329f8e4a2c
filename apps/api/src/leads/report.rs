use chrono::{DateTime, TimeZone};

use crate::models::lead::LeadResult;
use crate::scoring::Language;

/// Markdown digest of the highest-ranked leads with their outreach drafts.
/// `leads` must already be ranked.
pub fn top_leads_markdown<Tz>(
    leads: &[LeadResult],
    top_n: usize,
    language: Language,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let label = |en: &'static str, cn: &'static str| language.pick(en, cn);
    let timestamp = generated_at.format("%Y-%m-%d %H:%M:%S %Z");

    let mut lines = vec![
        label("# Top Leads + Outreach Drafts", "# 高优先级线索 + 外联草稿").to_string(),
        String::new(),
        format!("{}: {timestamp}", label("Generated", "生成时间")),
        String::new(),
    ];

    for (idx, lead) in leads.iter().take(top_n).enumerate() {
        lines.push(format!(
            "## {}. {} ({}, {})",
            idx + 1,
            lead.company_name,
            lead.city,
            lead.state
        ));
        lines.push(match language {
            Language::En => format!("- Score: **{}** (Tier {})", lead.score, lead.tier),
            Language::Cn => format!("- 评分: **{}** (等级 {})", lead.score, lead.tier),
        });
        lines.push(format!("- {}: {}", label("Why", "原因"), lead.reason));
        lines.push(format!("- {}: {}", label("Website", "网站"), lead.website));
        lines.push(format!("- {}: {}", label("Subject", "标题"), lead.outreach_subject));
        lines.push(label("- Outreach Draft:", "- 外联草稿:").to_string());
        lines.push("```text".to_string());
        lines.push(lead.outreach_message.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}
