use anyhow::Context;
use clap::Parser;
use experience_span::utils::error::{ErrorSeverity, ExpError};
use experience_span::utils::{logger, validation::Validate};
use experience_span::{
    CliConfig, Clock, ExperienceEngine, FixedClock, IntervalSource, Report, SystemClock,
    TomlConfig,
};

fn exit_with(e: &ExpError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting experience-span");
    tracing::info!("📁 Loading experience list from: {}", cli.config);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match TomlConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    tracing::info!(
        "✅ Configuration validated: {} entries, {} rounding",
        config.entries().len(),
        config.rounding_mode()
    );

    if cli.check {
        println!("✅ {} is valid", cli.config);
        return Ok(());
    }

    let today = match config.reference_date() {
        Ok(Some(date)) => date,
        Ok(None) => SystemClock.today(),
        Err(e) => exit_with(&e),
    };

    let profile_name = config.profile_name().map(str::to_string);
    let engine = ExperienceEngine::new(config, FixedClock(today));

    let summary = match engine.run() {
        Ok(summary) => summary,
        Err(e) => exit_with(&e),
    };
    let intervals = match engine.source().intervals() {
        Ok(intervals) => intervals,
        Err(e) => exit_with(&e),
    };

    let output = Report::new(&summary, &intervals)
        .with_profile_name(profile_name.as_deref())
        .render(cli.format)
        .context("failed to render report")?;
    print!("{}", output);

    Ok(())
}
