//! Prompt templates for the orchestration flow

use crate::orchestration::value_objects::SynthesisInput;

/// Templates for the planner-side prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for request refinement
    pub fn refine_system() -> &'static str {
        r#"You rewrite user requests so that specialist assistants can act on them.
Keep the user's intent, language and constraints. Make implicit requirements explicit.
Reply with the rewritten request only, without commentary or quotes."#
    }

    /// User prompt for request refinement
    pub fn refine_prompt(request: &str) -> String {
        format!(
            r#"Rewrite the following request so it is precise and unambiguous:

{}"#,
            request
        )
    }

    /// User prompt asking the planner for a structured decision
    pub fn plan_prompt(request: &str) -> String {
        format!(
            r#"User Request: {}

Task: Decide if this request needs an 'ANALYSIS' (research/data), a 'CODE' (programming), or 'BOTH'.
Respond with ONLY a JSON object: {{"type": "ANALYSIS"|"CODE"|"BOTH", "reason": "why"}}"#,
            request
        )
    }

    /// System prompt for input improvement after a rejected response
    pub fn improve_system() -> &'static str {
        r#"You improve task descriptions for AI assistants.
When an assistant's answer missed the point, you rewrite the task so the next attempt succeeds.
Reply with the rewritten task only."#
    }

    /// User prompt for input improvement
    pub fn improve_prompt(current_input: &str, rejected_response: &str) -> String {
        format!(
            r#"The following task produced an unsatisfactory response.

Task:
{}

Response:
{}

Rewrite the task to be clearer and more specific so that the response addresses it directly."#,
            current_input, rejected_response
        )
    }

    /// System prompt for synthesis
    pub fn synthesis_system() -> &'static str {
        r#"You combine findings from specialist assistants into one answer for the user.
Use simple English. Keep code blocks intact. Do not invent findings that are not present."#
    }

    /// User prompt for synthesis
    pub fn synthesis_prompt(input: &SynthesisInput) -> String {
        let mut prompt = format!("Original User Request: {}\n", input.original);

        if let Some(refined) = &input.refined {
            prompt.push_str(&format!("Refined Request: {}\n", refined));
        }

        prompt.push_str("\nExpert Findings:\n");
        if input.results.is_empty() {
            prompt.push_str("(no specialist produced a usable result)\n");
        } else {
            for result in &input.results {
                prompt.push_str(&result.labeled());
                prompt.push('\n');
            }
        }

        prompt.push_str(
            "\nTask: Create a final, cohesive response for the user in simple English.",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::intent::Specialist;
    use crate::orchestration::value_objects::AgentResult;

    #[test]
    fn test_plan_prompt_names_every_intent() {
        let prompt = PromptTemplate::plan_prompt("Chart GDP growth");
        assert!(prompt.contains("Chart GDP growth"));
        for intent in ["ANALYSIS", "CODE", "BOTH"] {
            assert!(prompt.contains(intent));
        }
        assert!(prompt.contains(r#"{"type""#));
    }

    #[test]
    fn test_improve_prompt_contains_both_parts() {
        let prompt = PromptTemplate::improve_prompt("do the thing", "what thing?");
        assert!(prompt.contains("do the thing"));
        assert!(prompt.contains("what thing?"));
    }

    #[test]
    fn test_synthesis_prompt_keeps_result_order() {
        let input = SynthesisInput::new(
            "original",
            Some("refined".to_string()),
            vec![
                AgentResult::validated(Specialist::Analysis, "numbers", 1),
                AgentResult::validated(Specialist::Code, "script", 2),
            ],
        );
        let prompt = PromptTemplate::synthesis_prompt(&input);
        assert!(prompt.contains("Original User Request: original"));
        assert!(prompt.contains("Refined Request: refined"));
        let analyst = prompt.find("ANALYST REPORT: numbers").unwrap();
        let coder = prompt.find("CODER OUTPUT: script").unwrap();
        assert!(analyst < coder);
    }

    #[test]
    fn test_synthesis_prompt_without_results() {
        let input = SynthesisInput::new("original", None, vec![]);
        let prompt = PromptTemplate::synthesis_prompt(&input);
        assert!(prompt.contains("no specialist produced a usable result"));
        assert!(!prompt.contains("Refined Request"));
    }
}
