//! lexile-es CLI
#![deny(unsafe_code)]

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use lexile_es::{Cli, Commands, commands};
use lexile_es_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand past this point
    let Some(command) = cli.command.take() else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(&cli)?;

    let log_dir = config.log_dir.as_ref().map(|d| d.as_std_path().to_path_buf());
    let obs = observability::ObservabilityConfig::from_env_with_overrides(log_dir)
        .with_console_level(observability::console_level(cli.quiet, cli.verbose));
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs, filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let result = run(command, cli.json, &config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

/// Discover configuration from the working directory, honoring `--config`.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd)
        .map_err(|e| anyhow!("current directory is not valid UTF-8: {}", e.into_path_buf().display()))?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = &cli.config {
        let path = Utf8PathBuf::try_from(path.clone())
            .map_err(|e| anyhow!("config path is not valid UTF-8: {}", e.into_path_buf().display()))?;
        loader = loader.with_file(&path);
    }
    loader.load().context("failed to load configuration")
}

fn run(
    command: Commands,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::cmd_analyze(args, json, config),
        Commands::Compare(args) => commands::compare::cmd_compare(args, json, config),
        Commands::Info(args) => commands::info::cmd_info(args, json, config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to create async runtime for MCP server")?
            .block_on(commands::serve::cmd_serve(args, config)),
    }
}
