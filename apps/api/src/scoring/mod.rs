//! Lead scoring engine.
//!
//! Pure functions only: no I/O, no shared mutable state. Safe to call from any
//! thread for any number of records.

pub mod angle;
pub mod engine;
pub mod keywords;
pub mod language;
pub mod reasons;
pub mod regions;
pub mod taxonomy;
pub mod tier;

pub use angle::{pick_angle, Angle};
pub use engine::{score_record, LeadScore};
pub use language::Language;
pub use reasons::render_reasons;
pub use regions::{summarize_regions, RegionCount, TargetRegions};
pub use tier::{choose_tier, Tier};

/// Six scored components. `total()` is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub industry_fit: i32,
    pub product_match: i32,
    pub digital_signal: i32,
    pub scale_signal: i32,
    pub intent_signal: i32,
    /// Zero or negative.
    pub penalties: i32,
}

impl ScoreBreakdown {
    /// Sum of all components clamped to `[0, 100]`.
    pub fn total(&self) -> i32 {
        let raw = self.industry_fit
            + self.product_match
            + self.digital_signal
            + self.scale_signal
            + self.intent_signal
            + self.penalties;
        raw.clamp(0, 100)
    }
}
