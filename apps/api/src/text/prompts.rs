// Prompt templates for the text operations.
// Single-placeholder templates use `.replace("{text}", ..)`; multi-field prompts are
// rendered in one `format!` pass so no input is ever re-scanned for placeholders.

pub const BRIEF_SUMMARY_TEMPLATE: &str =
    "Provide a brief summary of the following text in 1-2 sentences:\n\n{text}";

pub const DETAILED_SUMMARY_TEMPLATE: &str =
    "Provide a detailed summary of the following text in 3-5 sentences:\n\n{text}";

pub const BULLET_SUMMARY_TEMPLATE: &str =
    "Summarize the following text as 3-5 bullet points:\n\n{text}";

pub const KEY_POINTS_SUMMARY_TEMPLATE: &str =
    "Extract 3-5 key points from the following text as a numbered list:\n\n{text}";

pub const DEFAULT_SUMMARY_TEMPLATE: &str = "Summarize the following text:\n\n{text}";

/// Second call for summary types that do not already produce a list.
pub const KEY_TAKEAWAYS_TEMPLATE: &str =
    "Extract 3-5 key takeaways from the following text as a bullet list:\n\n{text}";

/// Translation prompt with an output-only constraint.
pub fn translate_prompt(text: &str, from_lang: &str, to_lang: &str) -> String {
    format!(
        "Translate the following text from {from_lang} to {to_lang}. \
        Only return the translated text, without any explanations, notes, or quotation marks.\n\n\
        Text: {text}"
    )
}

pub fn key_takeaways_prompt(text: &str) -> String {
    KEY_TAKEAWAYS_TEMPLATE.replace("{text}", text)
}
