//! Expected-keyword sets per validated producer.

use conductor_domain::{KeywordSet, Specialist};

/// Keyword sets the response validator checks against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    pub analysis: KeywordSet,
    pub code: KeywordSet,
    pub synthesis: KeywordSet,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            analysis: KeywordSet::analysis(),
            code: KeywordSet::code(),
            synthesis: KeywordSet::synthesis(),
        }
    }
}

impl KeywordConfig {
    pub fn for_specialist(&self, specialist: Specialist) -> &KeywordSet {
        match specialist {
            Specialist::Analysis => &self.analysis,
            Specialist::Code => &self.code,
        }
    }
}
