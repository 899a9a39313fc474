//! Expected-topic keyword sets.

use serde::{Deserialize, Deserializer, Serialize};

/// Keywords a response should mention at least one of.
///
/// Stored lowercased with blanks and duplicates removed. An empty set
/// accepts any non-empty response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    /// A set that accepts any non-empty response.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Default expectations for the Analysis agent.
    pub fn analysis() -> Self {
        Self::new(["data", "analysis", "report"])
    }

    /// Default expectations for the Code agent.
    pub fn code() -> Self {
        Self::new(["code", "function", "script"])
    }

    /// Default expectations for the synthesized answer.
    pub fn synthesis() -> Self {
        Self::new(["analysis", "code", "report"])
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Case-insensitive substring match against any keyword.
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

impl<'de> Deserialize<'de> for KeywordSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(KeywordSet::new(raw))
    }
}

impl std::fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.keywords.join(", "))
    }
}
