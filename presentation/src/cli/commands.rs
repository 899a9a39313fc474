//! CLI command definitions

use clap::{Parser, ValueEnum};
use conductor_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Only the final answer
    Answer,
    /// Plan, per-agent results and the final answer
    Full,
    /// JSON report
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Answer => OutputFormat::Answer,
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for agent-conductor
#[derive(Parser, Debug)]
#[command(name = "conductor")]
#[command(author, version, about = "Plan, delegate and synthesize answers with local specialist LLM agents")]
#[command(long_about = r#"
agent-conductor routes each request through a small team of local models
served by Ollama:

1. Refine:     the planner model rewrites the request for clarity
2. Plan:       the planner classifies it as ANALYSIS, CODE or BOTH
3. Delegate:   the Analysis and/or Code agents work on it concurrently,
               each answer checked and retried with an improved prompt
4. Synthesize: the planner merges the specialist outputs into one answer

Configuration files are loaded from (in priority order):
1. CONDUCTOR_* environment variables (e.g. CONDUCTOR_MODELS__CODER)
2. --config <path>          Explicit config file
3. ./conductor.toml         Project-level config
4. ~/.config/agent-conductor/config.toml   Global config

Example:
  conductor "Summarize the trade-offs of async Rust"
  conductor --coder-model qwen2.5-coder:14b "Write a binary search in Rust"
  conductor -o full "Analyze NVIDIA's stock and write a Python script to plot it"
  conductor --chat
"#)]
pub struct Cli {
    /// The request to answer (omit for interactive mode)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model used for refinement, planning and synthesis
    #[arg(long, value_name = "MODEL")]
    pub planner_model: Option<String>,

    /// Model used by the Analysis agent
    #[arg(long, value_name = "MODEL")]
    pub analyst_model: Option<String>,

    /// Model used by the Code agent
    #[arg(long, value_name = "MODEL")]
    pub coder_model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Skip the request refinement step
    #[arg(long)]
    pub no_refine: bool,

    /// Attempts per validate-and-iterate loop
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Disable web search for the Analysis agent
    #[arg(long)]
    pub no_search: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of each run to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

impl Cli {
    /// Interactive mode is requested explicitly or implied by a missing prompt
    pub fn is_interactive(&self) -> bool {
        self.chat || self.prompt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_prompt() {
        let cli = Cli::parse_from(["conductor", "-o", "json", "--no-refine", "What is Rust?"]);
        assert_eq!(cli.prompt.as_deref(), Some("What is Rust?"));
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
        assert!(cli.no_refine);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_no_prompt_is_interactive() {
        let cli = Cli::parse_from(["conductor", "-vv"]);
        assert!(cli.is_interactive());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_model_overrides() {
        let cli = Cli::parse_from([
            "conductor",
            "--planner-model",
            "llama3.1",
            "--coder-model",
            "codellama",
            "--max-attempts",
            "5",
            "hi",
        ]);
        assert_eq!(cli.planner_model.as_deref(), Some("llama3.1"));
        assert_eq!(cli.coder_model.as_deref(), Some("codellama"));
        assert!(cli.analyst_model.is_none());
        assert_eq!(cli.max_attempts, Some(5));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(Cli::try_parse_from(["conductor", "--max-attempts", "0", "hi"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Answer), OutputFormat::Answer);
        assert_eq!(OutputFormat::from(OutputFormatArg::Full), OutputFormat::Full);
    }
}
