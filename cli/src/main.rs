//! CLI entrypoint for agent-conductor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use conductor_application::{
    AnalysisAgent, CodeAgent, CompletionBackend, ConversationLogger, NoProgress, Orchestrator,
    ProgressNotifier,
};
use conductor_domain::OutputFormat;
use conductor_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OllamaClient, OllamaCompletionBackend,
    search,
};
use conductor_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, ReplConfig,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir_path().as_deref());

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    info!("Starting agent-conductor");

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.parse_format().0)
            .unwrap_or_default(),
        color: config.output.color && std::env::var_os("NO_COLOR").is_none(),
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let orchestrator = Arc::new(build_orchestrator(&config, &cli)?);

    let show_progress = config.repl.show_progress && !cli.quiet;

    if cli.is_interactive() {
        let repl = ChatRepl::new(orchestrator)
            .with_output(output)
            .with_repl_config(ReplConfig {
                show_progress,
                history_file: config.repl.history_path(),
            });
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode
    let prompt = cli.prompt.as_deref().unwrap_or_default();
    let progress: Box<dyn ProgressNotifier> = if !show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = orchestrator
        .handle_with_progress(prompt, progress.as_ref())
        .await;
    drop(progress);

    println!("{}", ConsoleFormatter.render(&report, output.format));

    Ok(())
}

/// Flags take precedence over every file and environment layer
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.planner_model {
        config.models.planner = Some(model.clone());
    }
    if let Some(model) = &cli.analyst_model {
        config.models.analyst = Some(model.clone());
    }
    if let Some(model) = &cli.coder_model {
        config.models.coder = Some(model.clone());
    }
    if let Some(url) = &cli.ollama_url {
        config.backend.ollama_url = url.clone();
    }
    if cli.no_refine {
        config.orchestration.refine_input = false;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.orchestration.max_attempts = max_attempts;
    }
    if cli.no_search {
        config.search.provider = "none".to_string();
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.display().to_string());
    }
}

fn build_orchestrator(config: &FileConfig, cli: &Cli) -> Result<Orchestrator> {
    let params = config.orchestration.to_execution_params();

    let client = Arc::new(
        OllamaClient::new(
            config.backend.ollama_url.clone(),
            Duration::from_secs(config.backend.request_timeout_secs),
        )
        .context("failed to create Ollama client")?,
    );

    let (planner_model, _) = config.models.parse_planner();
    let (analyst_model, _) = config.models.parse_analyst();
    let (coder_model, _) = config.models.parse_coder();
    info!(
        planner = %planner_model,
        analyst = %analyst_model,
        coder = %coder_model,
        ollama = client.base_url(),
        "Models configured"
    );

    let planner: Arc<dyn CompletionBackend> =
        Arc::new(OllamaCompletionBackend::new(client.clone(), planner_model));
    let analyst: Arc<dyn CompletionBackend> =
        Arc::new(OllamaCompletionBackend::new(client.clone(), analyst_model));
    let coder: Arc<dyn CompletionBackend> =
        Arc::new(OllamaCompletionBackend::new(client, coder_model));

    let mut analysis = AnalysisAgent::new(analyst, params.call_timeout);
    if let Some(search) = search::from_config(&config.search) {
        analysis = analysis.with_search(search);
    }
    let code = CodeAgent::new(coder, params.call_timeout);

    let mut orchestrator = Orchestrator::new(planner, Arc::new(analysis), Arc::new(code))
        .with_params(params)
        .with_keywords(config.validation.to_keyword_config());

    if let Some(path) = config.logging.conversation_log_path() {
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                orchestrator = orchestrator.with_conversation_logger(logger);
            }
            None if cli.conversation_log.is_some() => {
                return Err(anyhow!(
                    "cannot open conversation log {}",
                    path.display()
                ));
            }
            None => warn!("Continuing without conversation log"),
        }
    }

    Ok(orchestrator)
}

/// Install the global subscriber: stderr always, plus a daily-rotated file
/// under `log_dir` when configured. The guard must live until exit.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "conductor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .ok();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .try_init()
                .ok();
            None
        }
    }
}
