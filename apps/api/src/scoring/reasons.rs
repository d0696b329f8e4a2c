//! Human-readable reasons derived from breakdown thresholds.

use super::language::Language;
use super::ScoreBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    VerticalFit,
    ProductRelevance,
    DigitalSignal,
    BuyingIntent,
    LowRelevance,
}

impl Reason {
    pub fn text(self, language: Language) -> &'static str {
        match self {
            Reason::VerticalFit => language.pick(
                "Strong vertical fit (design/FF&E/staging)",
                "行业匹配度高（设计/FF&E/软装）",
            ),
            Reason::ProductRelevance => language.pick(
                "Clear furniture/lighting relevance",
                "与家具/灯具需求高度相关",
            ),
            Reason::DigitalSignal => language.pick(
                "Good digital buying signals (trade/procurement pages)",
                "数字化采购信号明确（trade/procurement 页面）",
            ),
            Reason::BuyingIntent => language.pick(
                "Intent signals suggest active vendor sourcing",
                "采购意向信号强（在找供应商）",
            ),
            Reason::LowRelevance => language.pick(
                "Contains low-relevance business signals",
                "存在低相关业务信号",
            ),
        }
    }
}

/// Independent threshold checks, in display order.
pub fn derive_reasons(breakdown: &ScoreBreakdown) -> Vec<Reason> {
    let checks = [
        (breakdown.industry_fit >= 26, Reason::VerticalFit),
        (breakdown.product_match >= 14, Reason::ProductRelevance),
        (breakdown.digital_signal >= 10, Reason::DigitalSignal),
        (breakdown.intent_signal >= 6, Reason::BuyingIntent),
        (breakdown.penalties < 0, Reason::LowRelevance),
    ];
    checks
        .into_iter()
        .filter_map(|(hit, reason)| hit.then_some(reason))
        .collect()
}

pub fn fallback_reason(language: Language) -> &'static str {
    language.pick("General fit", "整体匹配度一般")
}

/// Joins reasons for display; an empty set becomes the fallback string.
pub fn render_reasons(reasons: &[&str], language: Language) -> String {
    if reasons.is_empty() {
        return fallback_reason(language).to_string();
    }
    reasons.join(language.pick("; ", "；"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown::default()
    }

    #[test]
    fn test_no_thresholds_hit_yields_no_reasons() {
        assert!(derive_reasons(&breakdown()).is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive_and_ordered() {
        let b = ScoreBreakdown {
            industry_fit: 26,
            product_match: 14,
            digital_signal: 10,
            intent_signal: 6,
            penalties: -5,
            ..breakdown()
        };
        assert_eq!(
            derive_reasons(&b),
            vec![
                Reason::VerticalFit,
                Reason::ProductRelevance,
                Reason::DigitalSignal,
                Reason::BuyingIntent,
                Reason::LowRelevance,
            ]
        );
    }

    #[test]
    fn test_just_below_thresholds() {
        let b = ScoreBreakdown {
            industry_fit: 25,
            product_match: 13,
            digital_signal: 5,
            intent_signal: 5,
            penalties: 0,
            ..breakdown()
        };
        assert!(derive_reasons(&b).is_empty());
    }

    #[test]
    fn test_render_uses_language_separator() {
        let en = render_reasons(&["a", "b"], Language::En);
        let cn = render_reasons(&["a", "b"], Language::Cn);
        assert_eq!(en, "a; b");
        assert_eq!(cn, "a；b");
    }

    #[test]
    fn test_render_empty_falls_back() {
        assert_eq!(render_reasons(&[], Language::En), "General fit");
        assert_eq!(render_reasons(&[], Language::Cn), "整体匹配度一般");
    }
}
