use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use tracing::info;

use airwatch::{
    AirwatchConfig, AirwatchError, FileForecastSource, ForecastClient, ForecastOutlook,
    ForecastSource, OutlookSettings, advise, classify, logging,
};

const USAGE: &str = "airwatch - AQI classification and forecast outlooks

Usage:
  airwatch outlook <payload.json>   Build an outlook from a saved forecast payload
  airwatch fetch                    Fetch the forecast from the dashboard API
  airwatch classify <aqi>           Classify a single AQI value
  airwatch help                     Show this message

Configuration is read from airwatch.toml (or $AIRWATCH_CONFIG) and
AIRWATCH_* environment variables, e.g. AIRWATCH_API__BASE_URL.";

/// Commands that need configuration
enum Command {
    Outlook,
    Fetch,
    Classify,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AirwatchError>() {
                Some(airwatch_err) => eprintln!("Error: {}", airwatch_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let command = args.first().map(String::as_str).unwrap_or("help");
    if matches!(command, "help" | "--help" | "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let command = match command {
        "outlook" => Command::Outlook,
        "fetch" => Command::Fetch,
        "classify" => Command::Classify,
        other => bail!("Unknown command '{other}'.\n\n{USAGE}"),
    };

    let config = AirwatchConfig::load()?;
    logging::init(&config.logging)?;
    let settings = OutlookSettings::from(&config.forecast);

    match command {
        Command::Outlook => {
            let path = args
                .get(1)
                .context("Missing payload path. Usage: airwatch outlook <payload.json>")?;
            info!("Building outlook from {}", path);
            let source = FileForecastSource::new(path);
            print_outlook(&source, &settings).await
        }
        Command::Fetch => {
            info!("Fetching forecast from {}", config.api.base_url);
            let client = ForecastClient::new(&config.api)?;
            print_outlook(&client, &settings).await
        }
        Command::Classify => {
            let raw = args.get(1).context("Missing AQI value. Usage: airwatch classify <aqi>")?;
            let aqi: f64 = raw
                .parse()
                .map_err(|_| AirwatchError::invalid_input(format!("'{raw}' is not a number")))?;
            let classification = classify(aqi)?;
            let advisory = advise(aqi)?;
            let report = serde_json::json!({
                "aqi": aqi,
                "classification": classification,
                "description": classification.tier.description(),
                "advisory": advisory,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

async fn print_outlook(source: &impl ForecastSource, settings: &OutlookSettings) -> Result<()> {
    let payload = source.fetch_forecast().await?;
    let outlook = ForecastOutlook::from_payload(&payload, settings)?;
    println!("{}", serde_json::to_string_pretty(&outlook)?);
    Ok(())
}
