//! CLI argument definitions
//!
//! Every query setting is bound to an environment variable, so the tool runs
//! with no flags at all; flags only override the environment for a single run.

use std::path::PathBuf;

use clap::Parser;

use crate::api::MessageQuery;
use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_CHATLAB, DEFAULT_LIMIT, DEFAULT_OUTPUT_DIR};
use crate::error::AppError;
use crate::utils::parse_int;

#[derive(Debug, Parser)]
#[command(name = "msgsnap")]
#[command(
    about = "Fetch /api/v1/messages from the local messaging API and save the JSON response",
    version
)]
pub(crate) struct Cli {
    /// Base URL of the messaging API [default: http://127.0.0.1:5031]
    #[arg(long, env = "API_BASE_URL", value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Conversation/contact identifier to filter by
    #[arg(long, env = "TEST_TALKER")]
    pub(crate) talker: Option<String>,

    /// Maximum number of messages to request [default: 100]
    #[arg(long, env = "TEST_LIMIT", value_name = "N")]
    pub(crate) limit: Option<String>,

    /// Start date passed through to the API
    #[arg(long, env = "TEST_START_DATE", value_name = "DATE")]
    pub(crate) start: Option<String>,

    /// End date passed through to the API
    #[arg(long, env = "TEST_END_DATE", value_name = "DATE")]
    pub(crate) end: Option<String>,

    /// Chatlab flag passed through to the API [default: 0]
    #[arg(long, env = "TEST_CHATLAB", value_name = "N")]
    pub(crate) chatlab: Option<String>,

    /// Output file name (directory components are stripped)
    #[arg(short, long, value_name = "NAME")]
    pub(crate) output: Option<String>,

    /// Directory the snapshot is written to [default: .]
    #[arg(long, env = "TEST_OUTPUT_DIR", value_name = "DIR")]
    pub(crate) out_dir: Option<PathBuf>,

    /// Print the response without saving it
    #[arg(long)]
    pub(crate) no_save: bool,

    /// Enable debug output (request URL, status, timing)
    #[arg(long)]
    pub(crate) debug: bool,

    #[arg(skip)]
    limit_default: Option<i64>,

    #[arg(skip)]
    chatlab_default: Option<i64>,
}

impl Cli {
    /// Merge config file values into CLI (flags and env vars take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.talker.is_none() {
            self.talker = config.talker.clone();
        }
        if self.start.is_none() {
            self.start = config.start.clone();
        }
        if self.end.is_none() {
            self.end = config.end.clone();
        }
        if self.out_dir.is_none() {
            self.out_dir = config.output_dir.clone();
        }

        // Integers from the file are already typed; env/flag text is parsed in `query`
        self.limit_default = config.limit;
        self.chatlab_default = config.chatlab;

        self
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub(crate) fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Resolve the five query parameters; fails on non-numeric integer input.
    pub(crate) fn query(&self) -> Result<MessageQuery, AppError> {
        let limit = match self.limit.as_deref() {
            Some(raw) => parse_int("TEST_LIMIT", raw)?,
            None => self.limit_default.unwrap_or(DEFAULT_LIMIT),
        };
        let chatlab = match self.chatlab.as_deref() {
            Some(raw) => parse_int("TEST_CHATLAB", raw)?,
            None => self.chatlab_default.unwrap_or(DEFAULT_CHATLAB),
        };

        Ok(MessageQuery {
            talker: self.talker.clone().unwrap_or_default(),
            limit,
            start: self.start.clone().unwrap_or_default(),
            end: self.end.clone().unwrap_or_default(),
            chatlab,
        })
    }
}
