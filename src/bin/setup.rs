use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use portfolio_assistant::config::{config_file_path, load_or_default, save, AppConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    changed |= apply_overrides(&mut config, &args)?;

    if changed {
        let path = save(&config)?;
        println!("Portfolio assistant settings recorded at {}", path.display());
    } else {
        println!("Portfolio assistant settings already configured.");
    }

    Ok(())
}

struct CliArgs {
    profile: Option<PathBuf>,
    min_delay_ms: Option<u64>,
    max_delay_ms: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut profile = None;
        let mut min_delay_ms = None;
        let mut max_delay_ms = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--profile" => {
                    let value = args
                        .next()
                        .context("Expected a document path after --profile")?;
                    profile = Some(PathBuf::from(value));
                }
                "--min-delay" => {
                    min_delay_ms = Some(parse_millis(args.next(), "--min-delay")?);
                }
                "--max-delay" => {
                    max_delay_ms = Some(parse_millis(args.next(), "--max-delay")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            profile,
            min_delay_ms,
            max_delay_ms,
        })
    }
}

fn parse_millis(value: Option<String>, flag: &str) -> Result<u64> {
    let value = value.with_context(|| format!("Expected milliseconds after {flag}"))?;
    value
        .parse::<u64>()
        .with_context(|| format!("Invalid value '{value}' for {flag}"))
}

fn print_usage() {
    println!("Portfolio assistant setup");
    println!("Ensures profile and pacing settings are recorded in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --profile <path>     Profile document to load (default: data/data.json)");
    println!("  --min-delay <ms>     Lower bound of the thinking delay (default: 800)");
    println!("  --max-delay <ms>     Upper bound of the thinking delay (default: 1600)");
}

fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> Result<bool> {
    let mut changed = false;
    if let Some(profile) = &args.profile {
        if &config.profile.document_path != profile {
            config.profile.document_path = profile.clone();
            changed = true;
        }
    }
    if let Some(min) = args.min_delay_ms {
        changed |= config.pacing.min_delay_ms != min;
        config.pacing.min_delay_ms = min;
    }
    if let Some(max) = args.max_delay_ms {
        changed |= config.pacing.max_delay_ms != max;
        config.pacing.max_delay_ms = max;
    }
    if config.pacing.max_delay_ms < config.pacing.min_delay_ms {
        bail!(
            "Thinking delay range is empty: min {}ms exceeds max {}ms",
            config.pacing.min_delay_ms,
            config.pacing.max_delay_ms
        );
    }
    Ok(changed)
}
