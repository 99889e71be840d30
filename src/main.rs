use anyhow::Context;
use clap::Parser;
use scout::utils::{logger, validation::Validate};
use scout::{fragment_source, AppConfig, Cli, Command, EventOutcome, LoadOutcome, ScoutApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => AppConfig::default(),
    };

    logger::init_logger(&base.development.logging, cli.verbose);
    let config = base.resolve_named(&cli.env);

    tracing::info!("Starting scout CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Command::Config = cli.command {
        println!("{}", toml::to_string_pretty(config.as_ref())?);
        return Ok(());
    }

    let fragments = fragment_source(&cli.fragments)?;
    let app = ScoutApp::new(config.clone(), fragments);

    let mut exit_code = 0;
    let plan = cli.command.plan(&config.app.default_location);
    let outcome = match (&cli.command, &plan) {
        (Command::Load { module }, _) => app.load_module_by_name(module).await,
        (_, Some((module, _))) => app.load_module(*module).await,
        (_, None) => app.start().await,
    };

    match outcome {
        LoadOutcome::Loaded => {
            if let Some((_, Some(event))) = plan {
                if app.dispatch(event).await == EventOutcome::Failed {
                    exit_code = 2;
                }
            }
        }
        LoadOutcome::Failed => exit_code = 2,
        LoadOutcome::Disabled => {
            eprintln!("❌ This module is disabled by configuration");
            exit_code = 1;
        }
        LoadOutcome::Unknown => {
            eprintln!("❌ Unknown module");
            exit_code = 1;
        }
    }

    println!("{}", app.page().snapshot());

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
