use std::time::Duration;

/// Why the schedule could not be turned into cards
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to request schedule from {location}: {source}")]
    Transport {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Schedule request to {location} returned status {status}")]
    Status { location: String, status: u16 },
    #[error("Schedule request to {location} timed out after {timeout:?}")]
    Timeout { location: String, timeout: Duration },
    #[error("Failed to read schedule file {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse schedule document: {0}")]
    Parse(#[from] serde_json::Error),
}
