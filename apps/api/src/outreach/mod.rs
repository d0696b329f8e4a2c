// Outreach drafting: fixed bilingual templates, plus optional AI-written copy.
// All model calls go through llm_client::TextGenerator; no direct HTTP here.

pub mod prompts;
pub mod templates;
pub mod writer;

use serde::{Deserialize, Serialize};

use crate::models::lead::LeadResult;
use crate::scoring::Language;

pub use templates::template_outreach;
pub use writer::OutreachWriter;

/// A subject line and message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachDraft {
    pub subject: String,
    pub body: String,
}

/// Who is writing, and how.
#[derive(Debug, Clone, Copy)]
pub struct BrandBrief<'a> {
    pub brand_name: &'a str,
    pub positioning: &'a str,
    pub tone: &'a str,
    pub language: Language,
}

/// Who is being written to.
#[derive(Debug, Clone, Copy)]
pub struct Prospect<'a> {
    pub company_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub services: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a LeadResult> for Prospect<'a> {
    fn from(lead: &'a LeadResult) -> Self {
        Self {
            company_name: &lead.company_name,
            city: &lead.city,
            state: &lead.state,
            services: &lead.services,
            description: &lead.description,
        }
    }
}
