use anyhow::Context;
use clap::{CommandFactory, Parser};
use stock_dilution::config::VOLUME_ARGS;
use stock_dilution::core::{report, ConfigProvider};
use stock_dilution::utils::{logger, validation::Validate};
use stock_dilution::{
    CliConfig, DilutionCalculator, DilutionError, OutputFormat, ResolvedConfig, TomlConfig,
};

/// Reports a failure the same way for every stage and exits with status 1.
fn fail(stage: &str, e: &DilutionError) -> ! {
    tracing::error!("❌ {} failed: {}", stage, e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn load_file_config(path: &str) -> stock_dilution::Result<TomlConfig> {
    tracing::info!("📁 Loading configuration from: {}", path);
    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail("Configuration validation", &e);
    }

    let volumes = match config.volumes() {
        Ok(Some(volumes)) => volumes,
        // `-v` on its own: nothing to calculate.
        Ok(None) if config.verbose => return Ok(()),
        Ok(None) | Err(_) => CliConfig::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                format!("expected {}", VOLUME_ARGS),
            )
            .exit(),
    };

    let file_config = match config.config.as_deref().map(load_file_config) {
        Some(Ok(file_config)) => Some(file_config),
        Some(Err(e)) => fail("Loading the config file", &e),
        None => None,
    };

    let resolved = ResolvedConfig::resolve(
        config.target,
        file_config.as_ref().map(|c| c as &dyn ConfigProvider),
    );
    let format = config
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.output_format()))
        .unwrap_or_default();

    let calculator = DilutionCalculator::from_config(&resolved);
    let plan = match calculator.plan(volumes) {
        Ok(plan) => plan,
        Err(e) => fail("Calculation", &e),
    };

    match format {
        OutputFormat::Text => println!("{}", report::render_text(&plan)),
        OutputFormat::Json => {
            let json =
                report::render_json(&plan).context("failed to render the plan as JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
