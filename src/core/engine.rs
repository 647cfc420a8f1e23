//! refxss Core Engine
//!
//! Line producer, bounded worker pool, and single-task aggregation.
//!
//! ```text
//! input ──► producer ──► url channel ──► N workers ──► result channel ──► Reporter
//! ```
//!
//! The url channel closes when input is exhausted. The result channel closes
//! only after every worker has been joined.

use crate::core::context::Context;
use crate::http::{HttpClient, RequestExecutor};
use crate::reporting::{json, text, Finding, Reporter, ScanReport};
use crate::scanner::normalize;
use crate::xss::{detect_reflected, probe_characters};
use anyhow::Context as _;
use futures::future::join_all;
use std::borrow::Cow;
use std::ops::AddAssign;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};

pub struct Engine {
    ctx: Context,
}

/// Counters gathered per worker and summed at the barrier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub urls: usize,
    pub reflected_urls: usize,
    pub reflected_params: usize,
    pub findings: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, other: Self) {
        self.urls += other.urls;
        self.reflected_urls += other.reflected_urls;
        self.reflected_params += other.reflected_params;
        self.findings += other.findings;
    }
}

impl Engine {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        tracing::info!(
            "Starting scan: {} workers, {}s timeout",
            self.ctx.concurrency,
            self.ctx.timeout.as_secs()
        );
        if !self.ctx.headers.is_empty() {
            tracing::info!("  Custom headers: {}", self.ctx.headers.len());
        }

        let client = HttpClient::new(self.ctx.timeout, self.ctx.headers.clone())
            .context("failed to build HTTP client")?;

        let input = BufReader::new(tokio::io::stdin());
        let (report, stats) = scan(input, Arc::new(client), self.ctx.concurrency).await?;

        tracing::info!(
            "Scan complete: {} URLs, {} with reflections, {} reflected parameters, {} findings",
            stats.urls,
            stats.reflected_urls,
            stats.reflected_params,
            stats.findings
        );

        self.generate_report(&report)
    }

    fn generate_report(&self, report: &ScanReport) -> anyhow::Result<()> {
        use crate::cli::args::OutputFormat;

        let rendered = match self.ctx.output_format {
            OutputFormat::Json => json::render(report)?,
            // Colors only make sense on a terminal stream.
            OutputFormat::Text => {
                text::render(report, self.ctx.color && self.ctx.output_file.is_none())
            }
        };

        match self.ctx.output_file {
            Some(ref output_file) => {
                std::fs::write(output_file, &rendered)
                    .with_context(|| format!("failed to write report to {}", output_file))?;
                if report.is_empty() {
                    tracing::warn!("No reflected XSS parameters found");
                }
                tracing::info!("📄 Report saved to: {}", output_file);
            }
            None => {
                print!("{}", rendered);
                if matches!(self.ctx.output_format, OutputFormat::Json) {
                    println!();
                }
            }
        }

        Ok(())
    }
}

/// Scan every URL line from `input` with `concurrency` workers sharing `executor`.
///
/// Returns once input is exhausted and all in-flight work is done. The only
/// error is failing to read any input at all.
pub async fn scan<R, E>(
    input: R,
    executor: Arc<E>,
    concurrency: usize,
) -> anyhow::Result<(ScanReport, ScanStats)>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    E: RequestExecutor + 'static,
{
    let worker_count = concurrency.max(1);

    let (url_tx, url_rx) = mpsc::channel::<String>(worker_count);
    let (result_tx, mut result_rx) = mpsc::channel::<Finding>(worker_count);

    let producer = tokio::spawn(read_lines(input, url_tx));

    let url_rx = Arc::new(Mutex::new(url_rx));
    let mut workers = Vec::with_capacity(worker_count);
    for id in 0..worker_count {
        workers.push(tokio::spawn(run_worker(
            id,
            Arc::clone(&url_rx),
            Arc::clone(&executor),
            result_tx.clone(),
        )));
    }

    // Completion barrier: the last sender goes away only after every worker is joined.
    let barrier = tokio::spawn(async move {
        let mut stats = ScanStats::default();
        for outcome in join_all(workers).await {
            match outcome {
                Ok(worker_stats) => stats += worker_stats,
                Err(e) => tracing::error!("Worker task failed: {}", e),
            }
        }
        drop(result_tx);
        stats
    });

    let mut reporter = Reporter::new();
    while let Some(finding) = result_rx.recv().await {
        tracing::info!(
            "✅ {} → {} passes {:?}",
            finding.url,
            finding.parameter,
            finding.characters
        );
        reporter.add(finding);
    }

    let stats = barrier.await.context("worker barrier failed")?;
    let lines = producer.await.context("input reader failed")??;
    tracing::debug!("Read {} URLs from input", lines);

    Ok((reporter.finish(), stats))
}

/// Feed trimmed, non-blank lines into the url channel.
///
/// Lines are raw bytes; anything that is not UTF-8 is converted lossily so a
/// single odd line never stops the rest of the input.
async fn read_lines<R>(input: R, urls: mpsc::Sender<String>) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut segments = input.split(b'\n');
    let mut count = 0usize;

    loop {
        let raw = match segments.next_segment().await {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(e) if count == 0 => {
                return Err(e).context("failed to read URLs from input");
            }
            Err(e) => {
                tracing::warn!("Stopped reading input after {} URLs: {}", count, e);
                break;
            }
        };

        let line = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = line {
            tracing::debug!("Input line is not valid UTF-8, using lossy form: {}", line);
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if urls.send(line.to_string()).await.is_err() {
            break;
        }
        count += 1;
    }

    Ok(count)
}

async fn run_worker<E: RequestExecutor>(
    id: usize,
    urls: Arc<Mutex<mpsc::Receiver<String>>>,
    executor: Arc<E>,
    results: mpsc::Sender<Finding>,
) -> ScanStats {
    let mut stats = ScanStats::default();

    loop {
        let next = urls.lock().await.recv().await;
        let Some(raw) = next else { break };

        // Normalized once; every request below uses this exact string.
        let url = normalize(&raw);
        stats.urls += 1;

        let reflected = detect_reflected(executor.as_ref(), &url).await;
        if reflected.is_empty() {
            tracing::debug!("[worker {}] ✗ No reflection: {}", id, url);
            continue;
        }

        stats.reflected_urls += 1;
        stats.reflected_params += reflected.len();
        tracing::debug!("[worker {}] Reflected in {}: {:?}", id, url, reflected);

        for parameter in reflected {
            let characters = probe_characters(executor.as_ref(), &url, &parameter).await;
            if characters.is_empty() {
                tracing::debug!("[worker {}] {} reflects but filters every probe", id, parameter);
                continue;
            }

            stats.findings += 1;
            let finding = Finding {
                url: url.clone(),
                parameter,
                characters,
            };
            if results.send(finding).await.is_err() {
                return stats;
            }
        }
    }

    stats
}
