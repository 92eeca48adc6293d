//! Console formatting of returned summaries.

use crate::summary::SummaryType;

/// Produce the final console string for a raw summary.
///
/// Non-bullet presets only trim. The bullet transform is a best-effort
/// heuristic: it splits on ". " and will mis-split abbreviations ("e.g. ")
/// and decimals followed by a space; it is not a sentence parser.
pub fn render(kind: SummaryType, raw: &str) -> String {
    let text = raw.trim();
    if kind != SummaryType::Bullet {
        return text.to_string();
    }

    // Already bulleted by the model itself.
    if text.contains("\n-") {
        return text.to_string();
    }

    let split = text.replace(". ", ".\n- ");
    if split.starts_with("- ") {
        split
    } else {
        format!("- {split}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_bullet_presets_trim_only() {
        let raw = "  AI changes everything.  ";
        assert_eq!(render(SummaryType::Short, raw), "AI changes everything.");
        assert_eq!(render(SummaryType::Medium, raw), "AI changes everything.");
    }

    #[test]
    fn bullet_splits_sentences_into_list() {
        let out = render(SummaryType::Bullet, "A. B. C.");
        assert!(out.starts_with("- "));
        assert_eq!(out.matches("\n- ").count(), 2);
        assert_eq!(out, "- A.\n- B.\n- C.");
    }

    #[test]
    fn already_bulleted_text_is_unchanged() {
        let raw = "- first point\n- second point";
        assert_eq!(render(SummaryType::Bullet, raw), raw);
    }

    #[test]
    fn single_sentence_still_gets_a_marker() {
        assert_eq!(
            render(SummaryType::Bullet, "Only one sentence."),
            "- Only one sentence."
        );
    }
}
