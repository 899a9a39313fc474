//! Intent classification, specialist roster and the Plan.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What kind of work a request needs.
///
/// Closed set: planner output that does not decode into one of these
/// variants is a parse failure, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Research, data or explanation work
    Analysis,
    /// Programming work
    Code,
    /// Both of the above
    Both,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Analysis => "ANALYSIS",
            Intent::Code => "CODE",
            Intent::Both => "BOTH",
        }
    }

    /// Specialists this intent requires, in synthesis order.
    pub fn specialists(&self) -> &'static [Specialist] {
        match self {
            Intent::Analysis => &[Specialist::Analysis],
            Intent::Code => &[Specialist::Code],
            Intent::Both => &[Specialist::Analysis, Specialist::Code],
        }
    }

    pub fn requires(&self, specialist: Specialist) -> bool {
        self.specialists().contains(&specialist)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ANALYSIS" => Ok(Intent::Analysis),
            "CODE" => Ok(Intent::Code),
            "BOTH" => Ok(Intent::Both),
            other => Err(format!("unknown intent '{}'", other)),
        }
    }
}

impl Serialize for Intent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A specialist agent identity.
///
/// The declaration order is the synthesis order: results are collected into
/// slots indexed by [`Specialist::slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialist {
    Analysis,
    Code,
}

impl Specialist {
    /// Every specialist, in slot order.
    pub const ALL: [Specialist; 2] = [Specialist::Analysis, Specialist::Code];

    /// Number of result slots a delegation needs.
    pub const COUNT: usize = Self::ALL.len();

    pub fn slot(&self) -> usize {
        match self {
            Specialist::Analysis => 0,
            Specialist::Code => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialist::Analysis => "analysis",
            Specialist::Code => "code",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Specialist::Analysis => "Analysis Agent",
            Specialist::Code => "Code Agent",
        }
    }

    /// Label used in front of this specialist's output in the synthesis prompt.
    pub fn result_label(&self) -> &'static str {
        match self {
            Specialist::Analysis => "ANALYST REPORT",
            Specialist::Code => "CODER OUTPUT",
        }
    }
}

impl std::fmt::Display for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The planner's decision for one request (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "type")]
    pub intent: Intent,
    #[serde(default)]
    pub reason: String,
}

impl Plan {
    pub fn new(intent: Intent, reason: impl Into<String>) -> Self {
        Self {
            intent,
            reason: reason.into(),
        }
    }

    pub fn specialists(&self) -> &'static [Specialist] {
        self.intent.specialists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_specialists() {
        assert_eq!(Intent::Analysis.specialists(), &[Specialist::Analysis]);
        assert_eq!(Intent::Code.specialists(), &[Specialist::Code]);
        assert_eq!(
            Intent::Both.specialists(),
            &[Specialist::Analysis, Specialist::Code]
        );
        assert!(!Intent::Code.requires(Specialist::Analysis));
    }

    #[test]
    fn test_intent_from_str_is_case_insensitive() {
        assert_eq!("analysis".parse::<Intent>().unwrap(), Intent::Analysis);
        assert_eq!(" Both ".parse::<Intent>().unwrap(), Intent::Both);
        assert!("SEARCH".parse::<Intent>().is_err());
        assert!("".parse::<Intent>().is_err());
    }

    #[test]
    fn test_slots_follow_synthesis_order() {
        for (index, specialist) in Specialist::ALL.iter().enumerate() {
            assert_eq!(specialist.slot(), index);
        }
        assert!(Specialist::Analysis < Specialist::Code);
    }

    #[test]
    fn test_plan_serializes_with_type_key() {
        let plan = Plan::new(Intent::Both, "needs research and a script");
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "BOTH");
        assert_eq!(json["reason"], "needs research and a script");
    }
}
