use crate::revision::SentenceRevision;

pub const NO_REVISION: &str = "No revision needed.";
pub const NO_ISSUES: &str = "No issues found.";

/// Display form of one [`SentenceRevision`], fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionCard {
    pub original: String,
    pub revised: String,
    pub explanation: String,
}

impl RevisionCard {
    pub fn original_line(&self) -> String {
        format!("Original: {}", self.original)
    }

    pub fn revised_line(&self) -> String {
        format!("Revised: {}", self.revised)
    }

    pub fn explanation_line(&self) -> String {
        format!("Explanation: {}", self.explanation)
    }
}

impl From<SentenceRevision> for RevisionCard {
    fn from(revision: SentenceRevision) -> Self {
        Self {
            original: revision.original_sentence,
            revised: non_empty_or(revision.revised_sentence, NO_REVISION),
            explanation: non_empty_or(revision.explanation, NO_ISSUES),
        }
    }
}

// Empty strings count as absent
fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_keeps_present_fields() {
        let card = RevisionCard::from(SentenceRevision {
            original_sentence: "He go home.".to_string(),
            revised_sentence: Some("He goes home.".to_string()),
            explanation: Some("Subject-verb agreement.".to_string()),
        });
        assert_eq!(card.original_line(), "Original: He go home.");
        assert_eq!(card.revised_line(), "Revised: He goes home.");
        assert_eq!(card.explanation_line(), "Explanation: Subject-verb agreement.");
    }

    #[test]
    fn test_card_falls_back_when_absent() {
        let card = RevisionCard::from(SentenceRevision {
            original_sentence: "Fine.".to_string(),
            revised_sentence: None,
            explanation: None,
        });
        assert_eq!(card.revised, NO_REVISION);
        assert_eq!(card.explanation, NO_ISSUES);
    }

    #[test]
    fn test_card_falls_back_when_empty() {
        let card = RevisionCard::from(SentenceRevision {
            original_sentence: "Fine.".to_string(),
            revised_sentence: Some(String::new()),
            explanation: Some(String::new()),
        });
        assert_eq!(card.revised_line(), "Revised: No revision needed.");
        assert_eq!(card.explanation_line(), "Explanation: No issues found.");
    }
}
