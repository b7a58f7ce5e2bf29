mod api;
mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::{debug_log, set_debug};

fn main() {
    let cli = Cli::parse();
    let config = Config::load(cli.debug);
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli) {
        Ok(report) => {
            debug_log!(
                "done: {} top-level entries, saved: {}",
                top_level_len(&report.response),
                report.saved_to.is_some()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn top_level_len(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => items.len(),
        serde_json::Value::Object(map) => map.len(),
        _ => 1,
    }
}
