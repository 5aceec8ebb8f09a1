use crate::logging::LogLevel;
use crate::source::SourceError;

/// Decides how loudly a degraded fetch is logged. Degraded fetches never reach
/// the page, so the log is the only place they show up.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &SourceError) -> LogLevel {
        match error {
            // Expected: products without runs yet, queue items already cleared
            e if e.is_missing() => LogLevel::Debug,

            // Critical: the host refuses us
            SourceError::Http { status, .. } if *status == 401 => LogLevel::Error,
            SourceError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Temporary server issues
            SourceError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Fixture exists but is broken
            SourceError::Json(_) => LogLevel::Warn,

            // Network and disk issues
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
