//! Request log side channel.
//!
//! Every tool invocation writes a single line describing its outcome to an
//! injected log collaborator. The log is fire-and-forget: a write failure is
//! reported via tracing and never affects the tool result.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// A one-way log sink for tool invocations.
///
/// Implementations must never fail from the caller's perspective; errors are
/// swallowed internally.
pub trait ToolLog: Send + Sync {
    /// Append a single line to the log.
    fn write(&self, line: &str);
}

/// File-backed log that appends timestamped lines.
pub struct FileToolLog {
    path: PathBuf,
}

impl FileToolLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ToolLog for FileToolLog {
    fn write(&self, line: &str) {
        let stamped = format!("[{}] {}\n", chrono::Utc::now().to_rfc3339(), line);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(stamped.as_bytes()));
        if let Err(e) = result {
            warn!("Failed to write request log {:?}: {}", self.path, e);
        }
    }
}

/// Log sink that discards everything. Used when no log file is configured.
pub struct NullToolLog;

impl ToolLog for NullToolLog {
    fn write(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.log");
        let log = FileToolLog::new(path.clone());

        log.write("listing products: ok");
        log.write("fetching post: Error fetching post: not found");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("listing products: ok"));
        assert!(lines[1].contains("fetching post"));
    }

    #[test]
    fn test_file_log_swallows_errors() {
        // Directory path is not writable as a file; write must not panic.
        let dir = tempfile::tempdir().unwrap();
        let log = FileToolLog::new(dir.path().to_path_buf());
        log.write("this goes nowhere");
    }

    #[test]
    fn test_null_log_is_silent() {
        NullToolLog.write("anything");
    }
}
