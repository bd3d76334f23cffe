mod cli;
mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use galmir_fetch::{FetchOptions, Fetcher, ReqwestClient, RetryEvent, RetryPolicy};
use galmir_mirror::{ConsoleReporter, Downloader, TreeWalker, WalkOptions, WalkSummary};
use galmir_tree::{Endpoints, TreeClient};
use tracing::{error, info, warn};

use crate::cli::Cli;
use crate::config::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    match run(&settings) {
        Ok(summary) => {
            info!(
                folders = summary.folders,
                albums = summary.albums,
                downloaded = summary.downloaded,
                replaced = summary.replaced,
                unverified = summary.unverified,
                skipped = summary.skipped,
                failed = summary.failed,
                children_skipped = summary.children_skipped,
                nodes_abandoned = summary.nodes_abandoned,
                "Mirror finished"
            );
            if summary.is_complete() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<WalkSummary> {
    let options = FetchOptions::default()
        .user_agent(&settings.user_agent)
        .session_cookie(&settings.cookie_name, &settings.session_cookie)
        .retry(
            RetryPolicy::default()
                .max_retries(settings.retries)
                .delay(settings.retry_delay()),
        )
        .on_retry(Arc::new(|event: &RetryEvent| {
            warn!(
                url = %event.url,
                status = event.status,
                attempt = event.attempt,
                "Server error, retrying in {:?}",
                event.delay
            );
        }));

    let http = ReqwestClient::with_timeout(settings.timeout()).context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(http, options);
    let endpoints = Endpoints::new(&settings.base_url, &settings.api_key).context("invalid base_url")?;

    let walker = TreeWalker::new(
        TreeClient::new(fetcher.clone(), endpoints),
        Downloader::new(fetcher),
        ConsoleReporter::new(!settings.no_progress),
    )
    .with_options(WalkOptions {
        page_attempts:    settings.page_attempts(),
        page_retry_delay: settings.page_retry_delay(),
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    info!(node_id = %settings.node_id, output = %settings.output.display(), "Mirroring");
    Ok(runtime.block_on(walker.walk(&settings.node_id, &settings.output)))
}
