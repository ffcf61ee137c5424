//! The run driver: fetch once, snapshot the raw response, score every
//! posting in order, and persist the accepted list as it grows.

use std::path::Path;

use anyhow::{bail, Result};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::{job_records, GoodJobsFile, ScoredJob};
use crate::nuworks::NuworksClient;
use crate::scoring::Scorer;
use crate::storage;

/// Runs the four pipeline stages. A failed fetch is the only fatal outcome;
/// file-write errors are logged and the run continues.
pub async fn run(config: &Config, source: &NuworksClient, scorer: &dyn Scorer) -> Result<()> {
    let Some(body) = source.fetch_jobs().await else {
        bail!("failed to fetch jobs from NUWorks");
    };

    match storage::write_json_snapshot(&config.response_path, &body) {
        Ok(()) => info!("Response saved to {}", config.response_path.display()),
        Err(e) => error!("Failed to save response: {e:#}"),
    }

    let good_jobs = process_jobs(
        &body,
        source,
        scorer,
        config.min_score,
        &config.good_jobs_path,
    )
    .await;

    // Redundant with the incremental writes, but guarantees a final snapshot
    // even for an empty run.
    match storage::write_json_snapshot(&config.good_jobs_path, &good_jobs) {
        Ok(()) => info!("Good jobs saved to {}", config.good_jobs_path.display()),
        Err(e) => error!("Failed to save good jobs: {e:#}"),
    }

    Ok(())
}

/// Scores every record under `models` in fetch order, keeping those whose
/// reply is a digit string at or above `min_score`. The output file is
/// rewritten after each acceptance so partial progress survives a crash.
pub async fn process_jobs(
    body: &Value,
    source: &NuworksClient,
    scorer: &dyn Scorer,
    min_score: u32,
    out_path: &Path,
) -> GoodJobsFile {
    let Some(records) = job_records(body) else {
        warn!("No jobs data to process");
        return GoodJobsFile::default();
    };

    let total = records.len();
    info!("Processing {total} jobs...");

    let mut good_jobs = GoodJobsFile::default();
    for (i, job) in records.iter().enumerate() {
        let title = job.title();
        let company = job.company();
        info!("Processing job {}/{total}: {title} at {company}", i + 1);

        let reply = scorer.score(company, title, job.description()).await;
        let reply = reply.trim();

        let Some(score) = parse_score(reply) else {
            warn!("Invalid score received: {reply}");
            continue;
        };

        if score >= min_score {
            good_jobs.jobs.push(ScoredJob {
                job_title: title.to_string(),
                company_name: company.to_string(),
                score: reply.to_string(),
                url: source.job_url(job.id()),
            });
            if let Err(e) = storage::write_json_snapshot(out_path, &good_jobs) {
                error!("Failed to save good jobs: {e:#}");
            }
            info!("Added job with score {score}");
        } else {
            info!("Skipped job with score {score}");
        }
    }

    info!("Found {} qualifying jobs", good_jobs.jobs.len());
    good_jobs
}

/// A well-formed reply is a non-empty, all-ASCII-digit string that fits in
/// `u32`. Signs, whitespace, and overflow all count as malformed.
fn parse_score(reply: &str) -> Option<u32> {
    if reply.is_empty() || !reply.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    reply.parse().ok()
}
