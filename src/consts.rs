/// Messaging API the tool talks to when nothing else is configured
pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5031";

/// Endpoint path appended to the base URL
pub(crate) const MESSAGES_PATH: &str = "/api/v1/messages";

pub(crate) const DEFAULT_LIMIT: i64 = 100;
pub(crate) const DEFAULT_CHATLAB: i64 = 0;

/// Snapshot file name, local time at second resolution: "messages_20250115_093000.json"
pub(crate) const SNAPSHOT_FILENAME_FORMAT: &str = "messages_%Y%m%d_%H%M%S.json";

/// Output directory when neither flag, env nor config file name one
pub(crate) const DEFAULT_OUTPUT_DIR: &str = ".";
