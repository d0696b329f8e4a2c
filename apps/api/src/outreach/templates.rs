use crate::outreach::OutreachDraft;
use crate::scoring::Language;

const SIGNATURE: &str = "Alan";

/// Deterministic first-touch draft used when no AI copy is requested or available.
pub fn template_outreach(
    company: &str,
    city: &str,
    angle: &str,
    brand_name: &str,
    language: Language,
) -> OutreachDraft {
    match language {
        Language::Cn => OutreachDraft {
            subject: format!("{company}：家具与灯具 B2B 供货合作建议"),
            body: format!(
                "{company} 团队您好，\n\n\
                 我关注到你们在 {city} 的项目，想分享一个合作思路：{brand_name} 可以通过“{angle}”支持你们的交付。\
                 我们专注中高端家具与灯具，可按你们常见项目类型做组合打包与标准化供货。\n\n\
                 如果方便，我可以先发一版样例方案和价格结构，供你们快速评估。\n\n\
                 谢谢，\n\
                 {SIGNATURE}"
            ),
        },
        Language::En => OutreachDraft {
            subject: format!("{company}: B2B furniture + lighting sourcing idea"),
            body: format!(
                "Hi {company} team,\n\n\
                 I noticed your work in {city} and wanted to share a quick idea: {brand_name} can support your projects through {angle}. \
                 We focus on mid-to-high-end furniture and lighting, and can package products around your typical project needs.\n\n\
                 If useful, I can send a short sample package and pricing structure for one project type you handle most often.\n\n\
                 Best,\n\
                 {SIGNATURE}"
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_template() {
        let draft = template_outreach(
            "Atlas Interiors",
            "Austin",
            "trade pricing and curated furniture/lighting bundles",
            "Sunny Home",
            Language::En,
        );
        assert_eq!(
            draft.subject,
            "Atlas Interiors: B2B furniture + lighting sourcing idea"
        );
        assert!(draft.body.starts_with("Hi Atlas Interiors team,\n\n"));
        assert!(draft
            .body
            .contains("Sunny Home can support your projects through trade pricing"));
        assert!(draft.body.contains("in Austin"));
        assert!(draft.body.ends_with("Best,\nAlan"));
    }

    #[test]
    fn test_chinese_template() {
        let draft = template_outreach("Atlas", "Austin", "组合方案", "Sunny Home", Language::Cn);
        assert_eq!(draft.subject, "Atlas：家具与灯具 B2B 供货合作建议");
        assert!(draft.body.contains("在 Austin 的项目"));
        assert!(draft.body.contains("“组合方案”"));
        assert!(draft.body.ends_with("谢谢，\nAlan"));
    }
}
