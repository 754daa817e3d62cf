use std::env;
use std::path::Path;

use anyhow::Context;
use tracing::warn;

use ytgrab::utils::{format_bytes, init_tracing};
use ytgrab::{AppConfig, HttpTransport, VideoPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: ytgrab <page-url> <output-file>");
        std::process::exit(1);
    }

    let config = load_config();
    init_tracing(&config.logging.level);

    if let Err(error) = run(&config, &args[1], Path::new(&args[2])).await {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Subscriber is not installed yet
            eprintln!("Invalid configuration ({err:#}), falling back to defaults");
            AppConfig::default()
        }
    }
}

async fn run(config: &AppConfig, page_url: &str, destination: &Path) -> anyhow::Result<()> {
    let transport =
        HttpTransport::from_config(&config.http).context("Failed to create HTTP client")?;
    let pipeline = VideoPipeline::new(transport);

    let report = pipeline
        .download(page_url, destination)
        .await
        .with_context(|| format!("Download of {} failed", page_url))?;

    if report.bytes_written == 0 {
        warn!("Downloaded body was empty");
    }

    println!(
        "Saved {} ({}) to {}",
        format_bytes(report.bytes_written),
        if report.format.quality_label.is_empty() {
            "unknown quality"
        } else {
            report.format.quality_label.as_str()
        },
        report.destination.display()
    );
    Ok(())
}
