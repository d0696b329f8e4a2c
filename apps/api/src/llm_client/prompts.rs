// Shared prompt fragments.
// Each feature that calls the model keeps its own prompts.rs alongside it;
// this file holds the pieces they all repeat.

/// Demands a bare JSON object with the two draft keys.
pub const JSON_DRAFT_INSTRUCTION: &str = "Return STRICT JSON only with keys: subject, body.";

/// Length and content rules every outreach draft must follow.
pub const DRAFT_CONSTRAINTS: &str = "\
- keep subject under 70 chars
- keep email body under 120 words
- include one concrete value proposition
- include one clear CTA for a quick reply
- no hype, no emojis";

/// Stop the model from wrapping output in fences or commentary.
pub const NO_COMMENTARY_INSTRUCTION: &str = "- no markdown fences, no explanation text";
