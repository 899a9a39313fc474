//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Uses a line editor with history when stdin is a terminal; otherwise
//! reads plain lines so requests can be piped in.

use crate::config::{OutputConfig, ReplConfig};
use crate::output::formatter::OutputFormatter;
use crate::{ConsoleFormatter, ProgressReporter};
use conductor_application::{NoProgress, Orchestrator};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::{BufRead, IsTerminal};
use std::sync::Arc;
use tracing::{debug, warn};

/// What one line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplInput<'a> {
    Empty,
    Exit,
    Help,
    UnknownCommand(&'a str),
    Request(&'a str),
}

fn parse_line(line: &str) -> ReplInput<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    match line.to_ascii_lowercase().as_str() {
        "exit" | "quit" | "/exit" | "/quit" | "/q" => return ReplInput::Exit,
        "/help" | "/h" | "/?" => return ReplInput::Help,
        _ => {}
    }
    if line.starts_with('/') {
        ReplInput::UnknownCommand(line)
    } else {
        ReplInput::Request(line)
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    orchestrator: Arc<Orchestrator>,
    output: OutputConfig,
    repl: ReplConfig,
}

impl ChatRepl {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run until `exit`, `quit` or end of input
    pub async fn run(&self) -> RlResult<()> {
        if std::io::stdin().is_terminal() {
            self.run_editor().await
        } else {
            self.run_piped().await
        }
    }

    async fn run_editor(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let input = parse_line(&line);
                    if let ReplInput::Request(request) = input {
                        let _ = rl.add_history_entry(request);
                    }
                    if !self.dispatch(input).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    async fn run_piped(&self) -> RlResult<()> {
        debug!("stdin is not a terminal; reading plain lines");
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if !self.dispatch(parse_line(&line)).await {
                break;
            }
        }
        Ok(())
    }

    /// Act on one line. Returns false when the loop should stop.
    async fn dispatch(&self, input: ReplInput<'_>) -> bool {
        match input {
            ReplInput::Empty => true,
            ReplInput::Exit => {
                println!("Bye!");
                false
            }
            ReplInput::Help => {
                Self::print_commands();
                true
            }
            ReplInput::UnknownCommand(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                true
            }
            ReplInput::Request(request) => {
                self.process_request(request).await;
                true
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Agent Conductor - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?            - Show this help");
        println!("  exit, quit, /exit, /quit - Exit chat");
        println!();
    }

    async fn process_request(&self, request: &str) {
        println!();

        let report = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.orchestrator
                .handle_with_progress(request, &progress)
                .await
        } else {
            self.orchestrator
                .handle_with_progress(request, &NoProgress)
                .await
        };

        println!("{}", ConsoleFormatter.render(&report, self.output.format));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_line(""), ReplInput::Empty);
        assert_eq!(parse_line("   \t"), ReplInput::Empty);
    }

    #[test]
    fn test_exit_words() {
        for word in ["exit", "quit", "QUIT", " /exit ", "/quit", "/q"] {
            assert_eq!(parse_line(word), ReplInput::Exit, "{word:?}");
        }
    }

    #[test]
    fn test_help_and_unknown_commands() {
        assert_eq!(parse_line("/help"), ReplInput::Help);
        assert_eq!(parse_line("/models"), ReplInput::UnknownCommand("/models"));
    }

    #[test]
    fn test_request_is_trimmed() {
        assert_eq!(
            parse_line("  write a quicksort  \n"),
            ReplInput::Request("write a quicksort")
        );
        assert_eq!(
            parse_line("exit strategy for startups"),
            ReplInput::Request("exit strategy for startups")
        );
    }
}
