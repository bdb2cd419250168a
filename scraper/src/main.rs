//! RemoteOK Job Scraper
//!
//! Scrapes the dev, design, marketing, writing and sales categories of
//! RemoteOK.com and saves the listings to jobs_multi.xlsx

use std::error::Error;

use clap::Parser;
use remoteok_scraper::{Cli, Config, HttpSource, ReportOutcome, logger, run};

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from(Cli::parse());
    logger::init();

    println!("🔍 Fetching jobs from RemoteOK categories...\n");

    let source = HttpSource::new(&config)?;
    let summary = run(&config, &source)?;

    if summary.failed_pages > 0 {
        println!(
            "⚠️  {} of {} category pages could not be scraped",
            summary.failed_pages, summary.pages
        );
    }

    match summary.outcome {
        ReportOutcome::Written { rows, path } => {
            println!("✅ Saved {} jobs to {} with styling", rows, path.display());
            if let Some(json) = &config.json_output {
                println!("💾 Saved {} jobs to {}", rows, json.display());
            }
        }
        ReportOutcome::NothingToReport => println!("No jobs were scraped."),
    }

    Ok(())
}
