use std::path::PathBuf;

use clap::{ArgAction, Parser};
use serde::Serialize;

/// Flags layer over the config file and environment; unset flags do not
/// override anything.
#[derive(Debug, Default, Parser, Serialize)]
#[command(name = "galmir", version)]
#[command(about = "Mirror a remote tree of folders and albums onto local disk", long_about = None)]
pub struct Cli {
    /// Root of the remote service, e.g. https://photos.example.com
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Value of the session cookie
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,

    /// Folder node to mirror
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    /// Local directory the tree is mirrored into [default: .]
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// TOML settings file [default: galmir.toml, if present]
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Attempts per listing page before giving up on a node; 0 retries forever [default: 10]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_attempts: Option<u32>,

    /// [default: 1000]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_retry_delay_ms: Option<u64>,

    /// Retries per request on server errors [default: 3]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    /// [default: 500]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_delay_ms: Option<u64>,

    /// Per-request timeout; none when unset
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Name of the session cookie [default: SMSESS]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,

    /// Hide per-album progress bars
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_progress: bool,

    /// More log output; repeat for trace
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    #[serde(skip)]
    pub verbose: u8,

    /// Less log output
    #[arg(short, long, action = ArgAction::Count)]
    #[serde(skip)]
    pub quiet: u8,
}
