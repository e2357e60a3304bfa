//! Log source abstraction and HTTP client for the device endpoint.
//!
//! The dashboard reads the full event log through the [`LogSource`] trait so
//! the poll worker can be tested against scripted sources. The production
//! implementation, [`HttpLogSource`], issues a plain GET against the device's
//! `/api/touch-logs` endpoint and decodes the JSON array wholesale.

use crate::error::{Result, TouchdashError};
use crate::model::TouchEvent;
use async_trait::async_trait;

/// Read access to the server-authoritative event log.
///
/// Every fetch returns the full current log, never a delta. Implementations
/// must not retain state between calls; replacement semantics are handled by
/// the dashboard state.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch the complete event log.
    ///
    /// Fails with [`TouchdashError::Network`] on transport errors or a
    /// non-parseable body. The caller catches the failure, logs it, and keeps
    /// the previously rendered state untouched.
    async fn fetch_log(&self) -> Result<Vec<TouchEvent>>;

    /// Human-readable endpoint description for the dashboard header.
    fn endpoint(&self) -> &str;
}

/// HTTP implementation of [`LogSource`] backed by reqwest.
///
/// No request timeout is configured; a poll that never resolves is simply
/// overtaken by later ones.
#[derive(Debug)]
pub struct HttpLogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpLogSource {
    /// Build a source for a device base URL, e.g. `http://192.168.4.1`.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(TouchdashError::invalid_argument(format!(
                "base URL must start with http:// or https://: {}",
                base_url
            )));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            url: format!("{}/api/touch-logs", trimmed),
        })
    }
}

#[async_trait]
impl LogSource for HttpLogSource {
    async fn fetch_log(&self) -> Result<Vec<TouchEvent>> {
        let response = self.client.get(&self.url).send().await?;
        let events = response.error_for_status()?.json::<Vec<TouchEvent>>().await?;
        Ok(events)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_derived_from_base_url() {
        let source = HttpLogSource::new("http://192.168.4.1").unwrap();
        assert_eq!(source.endpoint(), "http://192.168.4.1/api/touch-logs");

        // Trailing slashes are normalized away
        let source = HttpLogSource::new("http://device.local/").unwrap();
        assert_eq!(source.endpoint(), "http://device.local/api/touch-logs");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = HttpLogSource::new("192.168.4.1").unwrap_err();
        assert!(matches!(err, TouchdashError::InvalidArgument { .. }));

        let err = HttpLogSource::new("ftp://device").unwrap_err();
        assert!(matches!(err, TouchdashError::InvalidArgument { .. }));
    }
}
