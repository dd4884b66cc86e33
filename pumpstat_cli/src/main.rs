use chrono::{DateTime, Utc};
use clap::Parser;
use eyre::{Result, WrapErr};
use pumpstat_core::{Clock, Indicator, SystemClock, build_glance};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the status glance for a pump telemetry snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a telemetry snapshot JSON file
    telemetry: PathBuf,

    /// Evaluate the snapshot at this RFC 3339 instant instead of the system clock
    #[arg(long)]
    at: Option<String>,

    /// Emit the glance as a JSON object instead of text rows
    #[arg(long)]
    json: bool,
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .wrap_err_with(|| format!("invalid --at instant: {raw}"))
}

fn indicator_json(indicator: Option<&Indicator>) -> serde_json::Value {
    match indicator {
        None => serde_json::Value::Null,
        Some(i) => serde_json::json!({
            "text": i.text,
            "severity": i.severity.to_string(),
        }),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.telemetry)
        .wrap_err_with(|| format!("reading telemetry snapshot {}", args.telemetry.display()))?;
    let telemetry =
        pumpstat_models::telemetry_from_json(&raw).wrap_err("parsing telemetry snapshot")?;

    let now = match args.at.as_deref() {
        Some(raw) => parse_instant(raw)?,
        None => SystemClock::new().now(),
    };
    tracing::debug!(%now, pump = %telemetry.name, "building glance");
    let glance = build_glance(&telemetry, now);

    if args.json {
        let out = serde_json::json!({
            "name": glance.name,
            "reservoir": indicator_json(glance.reservoir.as_ref()),
            "battery": indicator_json(glance.battery.as_ref()),
            "expiry": indicator_json(glance.expiry.as_ref()),
        });
        println!("{out}");
        return Ok(());
    }

    println!("{}", glance.name);
    for (label, indicator) in [
        ("reservoir", glance.reservoir.as_ref()),
        ("battery", glance.battery.as_ref()),
        ("expiry", glance.expiry.as_ref()),
    ] {
        if let Some(indicator) = indicator {
            println!(
                "  {label:<9} {:<8} ({})",
                indicator.text, indicator.severity
            );
        }
    }

    Ok(())
}
