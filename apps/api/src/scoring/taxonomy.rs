//! Keyword taxonomies. Process-wide read-only tables.
//!
//! Multi-word entries match as plain substrings of the normalized text,
//! single words match on word boundaries (see `keywords::contains_keyword`).

/// Keyword → weight table.
pub type KeywordTable = &'static [(&'static str, i32)];

/// Design / FF&E / hospitality / staging vocabulary.
pub const FIT_KEYWORDS: KeywordTable = &[
    ("interior", 8),
    ("interior design", 10),
    ("lighting", 8),
    ("furniture", 8),
    ("decor", 6),
    ("staging", 9),
    ("hospitality", 9),
    ("architecture", 6),
    ("ffe", 10),
    ("procurement", 9),
    ("model home", 9),
];

/// Purchasing-intent vocabulary.
pub const INTENT_KEYWORDS: KeywordTable = &[
    ("vendor", 4),
    ("sourcing", 4),
    ("preferred vendor", 5),
    ("specifies", 3),
    ("centralized furnishing", 5),
    ("recurring", 4),
    ("bundle", 3),
    ("qualification", 3),
];

/// Off-vertical vocabulary. All weights are negative.
pub const NEGATIVE_KEYWORDS: KeywordTable = &[
    ("auto", -10),
    ("automotive", -10),
    ("dental", -10),
    ("landscaping", -8),
    ("maintenance", -7),
    ("events", -5),
];

/// Bonus for services listed verbatim in the semicolon-delimited services field.
pub const SERVICE_BONUS: KeywordTable = &[
    ("interior design", 8),
    ("lighting design", 8),
    ("furniture procurement", 10),
    ("ffe consulting", 10),
    ("staging", 7),
    ("hospitality design", 8),
    ("interior architecture", 8),
];

/// Tables matched against normalized text.
pub(crate) const MATCHED_TABLES: [KeywordTable; 3] =
    [FIT_KEYWORDS, INTENT_KEYWORDS, NEGATIVE_KEYWORDS];

pub const INDUSTRY_FIT_CAP: i32 = 40;
pub const PRODUCT_MATCH_CAP: i32 = 20;
pub const DIGITAL_SIGNAL_CAP: i32 = 15;
pub const SCALE_SIGNAL_CAP: i32 = 15;
pub const INTENT_SIGNAL_CAP: i32 = 10;
pub const PENALTY_CEILING: i32 = 0;
