use std::path::PathBuf;

use serde_json::Value;

use crate::api::fetch_messages;
use crate::cli::Cli;
use crate::error::AppError;
use crate::output::save_json;
use crate::utils::debug_log;

/// What a run produced
pub(crate) struct RunReport {
    pub(crate) response: Value,
    pub(crate) saved_to: Option<PathBuf>,
}

/// Resolve the query, fetch once, print the response and save it.
///
/// Configuration errors surface before any network activity.
pub(crate) fn run(cli: &Cli) -> Result<RunReport, AppError> {
    let query = cli.query()?;
    debug_log!("base url: {}", cli.base_url());

    let response = fetch_messages(cli.base_url(), &query)?;
    println!("{response}");

    if cli.no_save {
        return Ok(RunReport {
            response,
            saved_to: None,
        });
    }

    let path = save_json(&response, &cli.out_dir(), cli.output.as_deref())?;
    println!("JSON saved to: {}", path.display());

    Ok(RunReport {
        response,
        saved_to: Some(path),
    })
}
