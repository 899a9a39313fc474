//! The Analysis agent's first-step decision.

/// Whether the Analysis agent should fetch web context before answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchDecision {
    Search,
    Analyze,
}

impl ResearchDecision {
    /// Decode the model's reply from its first word.
    ///
    /// Returns `None` when the reply names neither option.
    pub fn parse(reply: &str) -> Option<Self> {
        let first = reply
            .split(|c: char| !c.is_ascii_alphabetic())
            .find(|word| !word.is_empty())?;

        if first.eq_ignore_ascii_case("search") {
            Some(ResearchDecision::Search)
        } else if first.eq_ignore_ascii_case("analyze") || first.eq_ignore_ascii_case("analyse") {
            Some(ResearchDecision::Analyze)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decisions() {
        assert_eq!(ResearchDecision::parse("SEARCH"), Some(ResearchDecision::Search));
        assert_eq!(
            ResearchDecision::parse("  analyze."),
            Some(ResearchDecision::Analyze)
        );
        assert_eq!(
            ResearchDecision::parse("**Search** - I need fresh data"),
            Some(ResearchDecision::Search)
        );
    }

    #[test]
    fn test_parse_rejects_other_replies() {
        assert_eq!(ResearchDecision::parse("I would SEARCH"), None);
        assert_eq!(ResearchDecision::parse(""), None);
    }
}
