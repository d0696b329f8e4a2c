//! Content angle selection. First matching rule wins; list order is the tie-break.

use super::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {
    HospitalityPackage,
    StagingBundle,
    LightingBundle,
    TradePricing,
}

const ANGLE_RULES: &[(&[&str], Angle)] = &[
    (&["hospitality", "hotel"], Angle::HospitalityPackage),
    (&["staging", "model home"], Angle::StagingBundle),
    (&["lighting"], Angle::LightingBundle),
];

impl Angle {
    pub fn phrase(self, language: Language) -> &'static str {
        match self {
            Angle::HospitalityPackage => language.pick(
                "a hospitality FF&E package with repeat property rollout",
                "酒店与商业空间 FF&E 配套，支持多项目复用",
            ),
            Angle::StagingBundle => language.pick(
                "fast-turn staging bundles with predictable replenishment",
                "高周转样板间/软装组合，支持稳定补货",
            ),
            Angle::LightingBundle => language.pick(
                "lighting-plus-furniture bundles for cohesive project design",
                "灯具与家具一体化组合方案，保证风格一致",
            ),
            Angle::TradePricing => language.pick(
                "trade pricing and curated furniture/lighting bundles",
                "可落地的批发价格与家具/灯具组合采购方案",
            ),
        }
    }
}

/// Vocabulary is matched as plain substrings of the normalized text.
pub fn select_angle(normalized_text: &str) -> Angle {
    ANGLE_RULES
        .iter()
        .find(|(vocabulary, _)| vocabulary.iter().any(|w| normalized_text.contains(w)))
        .map(|(_, angle)| *angle)
        .unwrap_or(Angle::TradePricing)
}

pub fn pick_angle(normalized_text: &str, language: Language) -> &'static str {
    select_angle(normalized_text).phrase(language)
}
