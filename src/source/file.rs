//! Filesystem fixture source

use super::{FixtureSource, SourceError, SourceLocation};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads fixtures from a dash root directory. Relative paths, including `..`
/// segments, resolve on the filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    location: SourceLocation,
    root: PathBuf,
}

impl FileSource {
    pub fn new(location: SourceLocation) -> Self {
        let root = match &location {
            SourceLocation::Directory(path) => path.clone(),
            SourceLocation::Remote(_) => PathBuf::from("."),
        };
        Self { location, root }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl FixtureSource for FileSource {
    fn location(&self) -> &SourceLocation {
        &self.location
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let full_path = self.resolve(path);
        match tokio::fs::read(&full_path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SourceError::NotFound(full_path.display().to_string()))
            }
            Err(e) => Err(SourceError::Io(e)),
        }
    }
}
