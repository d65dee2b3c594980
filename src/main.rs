use clap::Parser;
use zodiac_match::config::Command;
use zodiac_match::core::{submit, AnalysisApi};
use zodiac_match::domain::model::FormData;
use zodiac_match::domain::zodiac::{parse_birthdate, sign_for_birthdate};
use zodiac_match::utils::error::ErrorSeverity;
use zodiac_match::utils::{logger, validation::Validate};
use zodiac_match::{
    AppConfig, CliConfig, ConsoleSurface, HttpAnalysisClient, SubmitController, ZodiacError,
    ZodiacSign,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting zodiac-match CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli.command, config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        if !cli.command.alerts_on_failure() {
            eprintln!("❌ {}", e.user_friendly_message());
        }

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: AppConfig) -> Result<(), ZodiacError> {
    match command {
        Command::Sign { birthdate } => {
            if parse_birthdate(birthdate).is_none() {
                return Err(ZodiacError::ValidationError {
                    message: format!("Unrecognised birthdate '{}'", birthdate),
                });
            }
            let sign = sign_for_birthdate(birthdate);
            println!("{} {} ({})", sign.symbol(), sign.display_name(), sign.id());
        }
        Command::Horoscope { sign } => {
            let sign: ZodiacSign = sign.parse()?;
            let client = HttpAnalysisClient::from_config(&config)?;
            let horoscope = client.horoscope(sign).await?;
            println!("{} {}", sign.symbol(), sign.display_name());
            println!("{}", serde_json::to_string_pretty(&horoscope)?);
        }
        Command::Health => {
            let client = HttpAnalysisClient::from_config(&config)?;
            let health = client.health().await?;
            println!(
                "✅ {} ({})",
                health.status,
                health.timestamp.as_deref().unwrap_or("-")
            );
        }
        Command::Analyze { form } => {
            let form = FormData::from_file(form)?;
            let client = HttpAnalysisClient::from_config(&config)?;
            let surface = ConsoleSurface::from_config(&config);
            let mut controller = SubmitController::new(client, surface, config.report.page_url);
            // The controller has already alerted; only the exit status is left.
            controller.submit(&form).await?;
            println!("✅ Analysis completed successfully!");
        }
        Command::Share => {
            let surface = ConsoleSurface::from_config(&config);
            submit::share(&surface, &config.report.page_url)?;
        }
        Command::Reset => {
            let surface = ConsoleSurface::from_config(&config);
            submit::clear_page(&surface)?;
            println!("✅ Ready for a new analysis");
        }
    }

    Ok(())
}
