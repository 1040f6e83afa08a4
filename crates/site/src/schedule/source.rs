use std::{path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::ScheduleError;

/// Where the schedule document is read from
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Read the raw document. One call is one read; nothing is retried.
    async fn read(&self) -> Result<Vec<u8>, ScheduleError>;
    fn location(&self) -> String;
}

/// Picks the source for a configured location: `http(s)://` URLs are
/// fetched, anything else is treated as a local file path.
pub fn source_for(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Arc<dyn ScheduleSource>, reqwest::Error> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpScheduleSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(FileScheduleSource::new(location, timeout)))
    }
}

pub struct HttpScheduleSource {
    client: Client,
    url: String,
    timeout: Option<Duration>,
}

impl HttpScheduleSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("booo-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            timeout,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ScheduleError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => ScheduleError::Timeout {
                location: self.url.clone(),
                timeout,
            },
            _ => ScheduleError::Transport {
                location: self.url.clone(),
                source: err,
            },
        }
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn read(&self) -> Result<Vec<u8>, ScheduleError> {
        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        debug!("requesting schedule: {}", self.url);
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(body.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

pub struct FileScheduleSource {
    path: PathBuf,
    timeout: Option<Duration>,
}

impl FileScheduleSource {
    pub fn new(path: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ScheduleSource for FileScheduleSource {
    async fn read(&self) -> Result<Vec<u8>, ScheduleError> {
        debug!("reading schedule: {}", self.path.display());
        let read = tokio::fs::read(&self.path);
        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, read).await.map_err(|_| {
                ScheduleError::Timeout {
                    location: self.location(),
                    timeout,
                }
            })?,
            None => read.await,
        };

        result.map_err(|source| ScheduleError::Io {
            location: self.location(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
