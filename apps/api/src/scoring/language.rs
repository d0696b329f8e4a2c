use std::fmt;

use serde::{Deserialize, Serialize};

/// Output language for reasons, angles and outreach copy.
///
/// Only two languages exist. Anything that is not `CN` resolves to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "CN")]
    Cn,
}

impl Language {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("cn") {
            Language::Cn
        } else {
            Language::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Cn => "CN",
        }
    }

    /// Name handed to the text-generation backend.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Cn => "Simplified Chinese",
        }
    }

    pub(crate) fn pick(self, en: &'static str, cn: &'static str) -> &'static str {
        match self {
            Language::En => en,
            Language::Cn => cn,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Language::parse("CN"), Language::Cn);
        assert_eq!(Language::parse(" cn "), Language::Cn);
        assert_eq!(Language::parse("EN"), Language::En);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Language::parse("fr"), Language::En);
        assert_eq!(Language::parse(""), Language::En);
    }

    #[test]
    fn test_serializes_as_upper_case_code() {
        assert_eq!(serde_json::to_string(&Language::Cn).unwrap(), "\"CN\"");
        assert_eq!(Language::En.to_string(), "EN");
    }
}
