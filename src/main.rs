use clap::Parser;
use roman_calc::utils::logger;
use roman_calc::{CalcEngine, CliConfig, Outcome, SimplePipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roman-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let messages = match config.resolve_messages() {
        Ok(messages) => messages,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let engine = CalcEngine::new(SimplePipeline::new(), messages);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = engine.run(&mut stdin.lock(), &mut stdout.lock())?;

    // Reported calculation errors still exit with status 0.
    match outcome {
        Outcome::Value(value) => tracing::info!("Result: {}", value),
        Outcome::Failed(kind) => tracing::info!("Reported {:?}", kind),
    }

    Ok(())
}
