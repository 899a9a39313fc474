//! Prompt templates for the specialist agents

/// Templates for the Analysis and Code agents
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// Default system prompt for the analyst's helper calls
    pub fn analyst_system() -> &'static str {
        "You are a helpful analyst."
    }

    /// Asks whether a web search is needed before answering
    pub fn research_decision(query: &str) -> String {
        format!(
            r#"User Query: {}
Do you have enough internal knowledge to answer this accurately, or do you need a web search?
Respond with ONLY 'SEARCH' or 'ANALYZE'."#,
            query
        )
    }

    /// Asks for a short web search query
    pub fn search_query(query: &str) -> String {
        format!(
            "Create a 5-word search query for: {}\nReply with the query only.",
            query
        )
    }

    /// System prompt for the final analyst report
    pub fn analyst_report_system() -> &'static str {
        "You are a data analyst. Provide a concise, factual report."
    }

    /// User prompt for the final analyst report
    pub fn analyst_report(context: &str, query: &str) -> String {
        format!("Using this context: {}\n\nAnswer this: {}", context, query)
    }

    /// System prompt for the Code agent
    pub fn coder_system() -> &'static str {
        r#"You are an expert Senior Software Engineer. Provide clean, efficient, and well-documented code. Always include a brief explanation of how the code works. Wrap your code in markdown blocks (```python ... ```)."#
    }
}
