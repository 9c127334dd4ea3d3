use anyhow::{Context, Result};
use duopane::cli;
use duopane::config::Config;
use duopane::host::RecordingHost;
use duopane::main_sequence::MainSequence;
use duopane::orchestrator::{OrchestratorSettings, PaneOrchestrator};
use duopane::shell::Shell;
use duopane::views::HeadlessBuilder;
use duopane::ContentKind;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Transactions the session host keeps for inspection
const HOST_HISTORY: usize = 64;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    let mut config = match runtime_options.load_config() {
        Ok(config) => config,
        // An explicit --config must load; the default location may fall back
        Err(e) if runtime_options.config_path.is_some() => return Err(e),
        Err(e) => {
            eprintln!("duopane: warning: {e:#}; using default configuration");
            Config::default()
        }
    };
    runtime_options.apply_to(&mut config);
    config.validate()?;

    // CLI --log-level takes precedence, then RUST_LOG, then the config file
    duopane::debug::init_log_bridge(
        runtime_options.log_level.map(|l| l.to_level_filter()),
        config.log_level.to_level_filter(),
    );
    log::info!("Starting duopane {}", duopane::VERSION);

    // Background saves run on the runtime's blocking pool
    let runtime = Runtime::new()?;

    let settings = OrchestratorSettings::from_config(&config);
    std::fs::create_dir_all(&settings.workspace_dir).with_context(|| {
        format!("Failed to create workspace {:?}", settings.workspace_dir)
    })?;

    let host = Arc::new(RecordingHost::with_history_limit(HOST_HISTORY));
    let builder = Arc::new(HeadlessBuilder::new(config.scratch_placeholders));
    let orchestrator = Arc::new(PaneOrchestrator::new(settings, builder, host.clone()));
    let mut sequence = MainSequence::new(Arc::clone(&orchestrator));

    orchestrator.enter_main_sequence();
    orchestrator.switch_to(ContentKind::Terminal)?;

    println!(
        "duopane {} - workspace {} (type `help`)",
        duopane::VERSION,
        orchestrator.workspace_dir().display()
    );
    let result = Shell::new(&mut sequence, runtime.handle().clone())
        .run(io::stdin().lock(), io::stdout().lock());

    orchestrator.cleanup();
    log::info!(
        "Shell exited after {} view host commits ({} violations), shutting down runtime",
        host.commit_count(),
        host.violations()
    );
    runtime.shutdown_timeout(std::time::Duration::from_secs(2));

    result
}
