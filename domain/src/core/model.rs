//! Model value object representing a locally served LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known local models (Value Object)
///
/// Each role in the pipeline is bound to one model: the planner handles
/// refinement, planning, input improvement and synthesis, while the two
/// specialists each run on their own model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama32,
    Llama31,
    Phi4Mini,
    Phi4,
    Qwen25Coder7b,
    Qwen25Coder14b,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama32 => "llama3.2",
            Model::Llama31 => "llama3.1",
            Model::Phi4Mini => "phi4-mini",
            Model::Phi4 => "phi4",
            Model::Qwen25Coder7b => "qwen2.5-coder:7b",
            Model::Qwen25Coder14b => "qwen2.5-coder:14b",
            Model::Custom(s) => s,
        }
    }

    /// Default model for planning, refinement and synthesis
    pub fn default_planner() -> Model {
        Model::Llama32
    }

    /// Default model for the analysis specialist
    pub fn default_analyst() -> Model {
        Model::Phi4Mini
    }

    /// Default model for the code specialist
    pub fn default_coder() -> Model {
        Model::Qwen25Coder7b
    }

    /// Check if this is a code-tuned model
    pub fn is_coder(&self) -> bool {
        matches!(self, Model::Qwen25Coder7b | Model::Qwen25Coder14b)
    }
}

impl Default for Model {
    /// Returns the default planner model
    fn default() -> Self {
        Model::default_planner()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama3.2" => Model::Llama32,
            "llama3.1" => Model::Llama31,
            "phi4-mini" => Model::Phi4Mini,
            "phi4" => Model::Phi4,
            "qwen2.5-coder:7b" => Model::Qwen25Coder7b,
            "qwen2.5-coder:14b" => Model::Qwen25Coder14b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [
            Model::default_planner(),
            Model::default_analyst(),
            Model::default_coder(),
        ] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistral:7b-instruct".parse().unwrap();
        assert_eq!(model, Model::Custom("mistral:7b-instruct".to_string()));
        assert_eq!(model.to_string(), "mistral:7b-instruct");
    }

    #[test]
    fn test_role_defaults() {
        assert_eq!(Model::default(), Model::Llama32);
        assert_eq!(Model::default_analyst().as_str(), "phi4-mini");
        assert!(Model::default_coder().is_coder());
        assert!(!Model::default_planner().is_coder());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Qwen25Coder7b).unwrap();
        assert_eq!(json, "\"qwen2.5-coder:7b\"");
        let model: Model = serde_json::from_str("\"phi4-mini\"").unwrap();
        assert_eq!(model, Model::Phi4Mini);
    }
}
