//! Lead scoring: deterministic, side-effect-free rules turning one record
//! into a bounded breakdown, reasons and the normalized text used for matching.
//!
//! Component order matters only for display (reasons). Industry fit is the one
//! order-sensitive rule: keyword sum first, then service bonuses, each addition
//! reclamped to the cap.

use super::keywords::{keyword_points, normalize_text, parse_services, to_int};
use super::language::Language;
use super::reasons::derive_reasons;
use super::regions::TargetRegions;
use super::taxonomy::{
    DIGITAL_SIGNAL_CAP, FIT_KEYWORDS, INDUSTRY_FIT_CAP, INTENT_KEYWORDS, INTENT_SIGNAL_CAP,
    NEGATIVE_KEYWORDS, PENALTY_CEILING, PRODUCT_MATCH_CAP, SCALE_SIGNAL_CAP, SERVICE_BONUS,
};
use super::ScoreBreakdown;
use crate::models::lead::LeadRecord;

const DIGITAL_SIGNAL_POINTS: i32 = 5;
const TARGET_REGION_BONUS: i32 = 2;

/// Everything the engine derives for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadScore {
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<&'static str>,
    pub normalized_text: String,
}

pub fn score_record(record: &LeadRecord, targets: &TargetRegions, language: Language) -> LeadScore {
    let text = normalize_text(&[&record.description, &record.services]);
    let services = parse_services(&record.services);

    let breakdown = ScoreBreakdown {
        industry_fit: industry_fit(&text, &services),
        product_match: product_match(&text),
        digital_signal: digital_signal(record),
        scale_signal: scale_signal(record, targets),
        intent_signal: keyword_points(&text, INTENT_KEYWORDS, INTENT_SIGNAL_CAP),
        penalties: keyword_points(&text, NEGATIVE_KEYWORDS, PENALTY_CEILING),
    };

    let reasons = derive_reasons(&breakdown)
        .into_iter()
        .map(|reason| reason.text(language))
        .collect();

    LeadScore {
        breakdown,
        reasons,
        normalized_text: text,
    }
}

fn industry_fit(text: &str, services: &[String]) -> i32 {
    let mut fit = keyword_points(text, FIT_KEYWORDS, INDUSTRY_FIT_CAP);
    for (service, bonus) in SERVICE_BONUS {
        if services.iter().any(|s| s == service) {
            fit = (fit + bonus).min(INDUSTRY_FIT_CAP);
        }
    }
    fit
}

fn product_match(text: &str) -> i32 {
    let mut points = 0;
    if text.contains("lighting") {
        points += 10;
    }
    if text.contains("furniture") {
        points += 10;
    }
    if text.contains("decor") {
        points += 4;
    }
    points.min(PRODUCT_MATCH_CAP)
}

fn digital_signal(record: &LeadRecord) -> i32 {
    let signals = [
        record.website.starts_with("http"),
        is_yes(&record.has_trade_program),
        is_yes(&record.has_procurement_page),
    ];
    let hits = signals.iter().filter(|&&hit| hit).count() as i32;
    (hits * DIGITAL_SIGNAL_POINTS).min(DIGITAL_SIGNAL_CAP)
}

fn is_yes(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case("yes")
}

fn scale_signal(record: &LeadRecord, targets: &TargetRegions) -> i32 {
    let employees = to_int(&record.employee_estimate);
    let projects = to_int(&record.project_count);

    let mut scale = 0;
    if (10..=80).contains(&employees) {
        scale += 8;
    } else if employees > 80 {
        scale += 5;
    }

    if projects >= 100 {
        scale += 7;
    } else if projects >= 60 {
        scale += 4;
    }
    scale = scale.min(SCALE_SIGNAL_CAP);

    // Region bonus lands after the subtotal is capped.
    if targets.contains(&record.state) {
        scale = (scale + TARGET_REGION_BONUS).min(SCALE_SIGNAL_CAP);
    }
    scale
}
