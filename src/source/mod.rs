//! Fixture sources
//!
//! The dashboard reads every fixture through [`FixtureSource`], addressed by a
//! path relative to the dash root (`products.json`, `runs/<id>/last_run.json`,
//! `../nexus/inbox/<id>.json`).

use serde::de::DeserializeOwned;

pub mod error;
mod file;
mod http;
pub mod location;

pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;
pub use location::SourceLocation;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FixtureSource: Send + Sync {
    /// Where this source reads from.
    fn location(&self) -> &SourceLocation;

    /// Fetch the raw bytes of the fixture at `path`.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError>;
}

/// Fetch the fixture at `path` and decode it as JSON.
pub async fn fetch_json<T: DeserializeOwned>(
    source: &dyn FixtureSource,
    path: &str,
) -> Result<T, SourceError> {
    let bytes = source.fetch(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
