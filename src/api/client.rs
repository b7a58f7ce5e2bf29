use std::time::Instant;

use serde_json::Value;

use super::query::{MessageQuery, messages_url};
use crate::error::AppError;
use crate::utils::debug_log;

/// GET `/api/v1/messages` and parse the body as JSON.
///
/// The HTTP status is not an error on its own: a 500 with a JSON body is
/// returned like any other response, and a non-JSON body fails with
/// [`AppError::Decode`] whatever the status. No timeout or retry is applied.
pub(crate) fn fetch_messages(base_url: &str, query: &MessageQuery) -> Result<Value, AppError> {
    let url = messages_url(base_url);
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into();

    debug_log!("GET {url} {:?}", query.pairs());
    let start = Instant::now();

    let response = agent
        .get(&url)
        .query_pairs(query.pairs())
        .call()
        .map_err(|source| AppError::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status().as_u16();
    let mut body = response.into_body();
    let value = serde_json::from_reader(body.as_reader())
        .map_err(|source| AppError::Decode { status, source })?;

    debug_log!(
        "HTTP {status} ({:.2}ms)",
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(value)
}
