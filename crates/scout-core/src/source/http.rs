//! libcurl-backed source for the live listing API.

use serde::de::DeserializeOwned;

use crate::config::HttpConfig;
use crate::model::{Page, Record};

use super::{FetchError, RecordSource};

/// Performs a blocking GET per call and decodes the JSON body.
/// Each call builds its own `Easy` handle, so one source can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    http: HttpConfig,
}

impl HttpSource {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.connect_timeout(self.http.connect_timeout())
            .map_err(transport)?;
        easy.timeout(self.http.timeout()).map_err(transport)?;
        easy.useragent(concat!("scout/", env!("CARGO_PKG_VERSION")))
            .map_err(transport)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let status = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }
        Ok(body)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get(url)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl RecordSource for HttpSource {
    fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        self.get_json(url)
    }

    fn fetch_record(&self, url: &str) -> Result<Record, FetchError> {
        self.get_json(url)
    }
}
