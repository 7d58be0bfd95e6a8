//! Summary styles and their prompt templates.

use crate::text::prompts::{
    BRIEF_SUMMARY_TEMPLATE, BULLET_SUMMARY_TEMPLATE, DEFAULT_SUMMARY_TEMPLATE,
    DETAILED_SUMMARY_TEMPLATE, KEY_POINTS_SUMMARY_TEMPLATE,
};

/// Requested summary style. Unrecognised values fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryType {
    Brief,
    Detailed,
    Bullets,
    Key,
    Default,
}

impl SummaryType {
    pub fn parse(value: &str) -> Self {
        match value {
            "brief" => SummaryType::Brief,
            "detailed" => SummaryType::Detailed,
            "bullets" => SummaryType::Bullets,
            "key" => SummaryType::Key,
            _ => SummaryType::Default,
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            SummaryType::Brief => BRIEF_SUMMARY_TEMPLATE,
            SummaryType::Detailed => DETAILED_SUMMARY_TEMPLATE,
            SummaryType::Bullets => BULLET_SUMMARY_TEMPLATE,
            SummaryType::Key => KEY_POINTS_SUMMARY_TEMPLATE,
            SummaryType::Default => DEFAULT_SUMMARY_TEMPLATE,
        }
    }

    /// True when the summary itself is already a list and doubles as the key points.
    pub fn is_list(self) -> bool {
        matches!(self, SummaryType::Bullets | SummaryType::Key)
    }

    pub fn prompt(self, text: &str) -> String {
        self.template().replace("{text}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(SummaryType::parse("brief"), SummaryType::Brief);
        assert_eq!(SummaryType::parse("detailed"), SummaryType::Detailed);
        assert_eq!(SummaryType::parse("bullets"), SummaryType::Bullets);
        assert_eq!(SummaryType::parse("key"), SummaryType::Key);
    }

    #[test]
    fn test_unknown_type_falls_back_to_default() {
        assert_eq!(SummaryType::parse("haiku"), SummaryType::Default);
        assert_eq!(SummaryType::parse("Brief"), SummaryType::Default);
    }

    #[test]
    fn test_only_bullets_and_key_are_lists() {
        assert!(SummaryType::Bullets.is_list());
        assert!(SummaryType::Key.is_list());
        assert!(!SummaryType::Brief.is_list());
        assert!(!SummaryType::Detailed.is_list());
        assert!(!SummaryType::Default.is_list());
    }

    #[test]
    fn test_prompt_lengths_match_style() {
        assert!(SummaryType::Brief.prompt("x").contains("1-2 sentences"));
        assert!(SummaryType::Detailed.prompt("x").contains("3-5 sentences"));
        assert!(SummaryType::Bullets.prompt("x").contains("3-5 bullet points"));
        assert!(SummaryType::Key.prompt("x").contains("numbered list"));
        assert_eq!(
            SummaryType::Default.prompt("x"),
            "Summarize the following text:\n\nx"
        );
    }
}
