use super::{FileSource, FixtureSource, HttpSource, SourceError};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Where the dashboard fixtures live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// A dash root directory on the local filesystem.
    Directory(PathBuf),
    /// A dash root served over HTTP(S). Always ends with `/`.
    Remote(String),
}

impl SourceLocation {
    /// Opens a fixture source reading from this location.
    pub fn open(&self) -> Result<Box<dyn FixtureSource>, SourceError> {
        match self {
            SourceLocation::Directory(_) => Ok(Box::new(FileSource::new(self.clone()))),
            SourceLocation::Remote(_) => Ok(Box::new(HttpSource::new(self.clone())?)),
        }
    }
}

impl FromStr for SourceLocation {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SourceError::InvalidUrl("empty source".to_string()));
        }
        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            // Without the trailing slash URL joining would drop the last segment.
            let base = if s.ends_with('/') {
                s.to_string()
            } else {
                format!("{}/", s)
            };
            Ok(SourceLocation::Remote(base))
        } else {
            Ok(SourceLocation::Directory(PathBuf::from(s)))
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::Directory(path) => write!(f, "{}", path.display()),
            SourceLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_location() {
        assert_eq!(
            "dash".parse::<SourceLocation>().unwrap(),
            SourceLocation::Directory(PathBuf::from("dash"))
        );
        assert_eq!(
            "http://localhost:8080/dash".parse::<SourceLocation>().unwrap(),
            SourceLocation::Remote("http://localhost:8080/dash/".to_string())
        );
        assert_eq!(
            "HTTPS://example.com/dash/".parse::<SourceLocation>().unwrap(),
            SourceLocation::Remote("HTTPS://example.com/dash/".to_string())
        );
        assert!("  ".parse::<SourceLocation>().is_err());
    }
}
