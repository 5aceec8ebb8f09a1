//! HTTP fixture source
//!
//! Fetches fixtures from a dash root served over HTTP, e.g. the static file
//! server that hosts the rendered page.

use super::{FixtureSource, SourceError, SourceLocation};
use crate::consts::dash_consts::http::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use reqwest::{Client, ClientBuilder, Response, Url};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("codemonkeys-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    location: SourceLocation,
    base: Url,
}

impl HttpSource {
    pub fn new(location: SourceLocation) -> Result<Self, SourceError> {
        let base = match &location {
            SourceLocation::Remote(url) => {
                Url::parse(url).map_err(|e| SourceError::InvalidUrl(format!("{}: {}", url, e)))?
            }
            SourceLocation::Directory(path) => {
                return Err(SourceError::InvalidUrl(format!(
                    "{} is a directory, not a URL",
                    path.display()
                )));
            }
        };
        let client = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            location,
            base,
        })
    }

    /// Joins a fixture path onto the base URL. Each segment is percent-encoded;
    /// `.` and `..` keep their URL meaning.
    fn build_url(&self, path: &str) -> Result<Url, SourceError> {
        let encoded = path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| match segment {
                "." | ".." => segment.to_string(),
                _ => urlencoding::encode(segment).into_owned(),
            })
            .collect::<Vec<_>>()
            .join("/");
        self.base
            .join(&encoded)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn handle_response_status(response: Response) -> Result<Response, SourceError> {
        if !response.status().is_success() {
            return Err(SourceError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl FixtureSource for HttpSource {
    fn location(&self) -> &SourceLocation {
        &self.location
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.build_url(path)?;
        let response = self.client.get(url).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
