use climate_migration_risk::{
    config::{LoggingSettings, Settings},
    models::AssessmentRequest,
    services::{noise_from_settings, AssessmentService, RiskCalculator},
    AppError,
};
use std::io::{self, Read, Write};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenvy::dotenv().ok();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            // Nothing configured yet, so report through the default subscriber.
            init_logging(&LoggingSettings::default());
            fail("Failed to load configuration", e);
        }
    };

    init_logging(&settings.logging);
    info!(
        "Configuration loaded: noise mode {:?}, log format {}",
        settings.noise.mode, settings.logging.format
    );

    if let Err(e) = run(&settings) {
        fail("Assessment failed", e);
    }
}

fn fail(context: &str, e: AppError) -> ! {
    error!("{}: {}", context, e);
    eprintln!("climate-risk: {}", e);
    std::process::exit(1);
}

fn run(settings: &Settings) -> Result<(), AppError> {
    info!("Starting climate migration risk assessment");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: AssessmentRequest = serde_json::from_str(&input)?;

    let calculator = RiskCalculator::new(settings.scoring.clone());
    let mut noise = noise_from_settings(&settings.noise);
    let report = AssessmentService::new(&calculator).evaluate(request, &mut noise)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}

/// Logs go to stderr so the report on stdout stays machine-readable.
/// Returns false when a global subscriber was already installed.
fn init_logging(logging: &LoggingSettings) -> bool {
    let level = logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("climate_migration_risk={}", level).into());

    let installed = match logging.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        "pretty" => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
    };
    installed.is_ok()
}
