//! Sources of raw battery diagnostic text.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Default time budget for one `adb` invocation.
pub const DEFAULT_ADB_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors produced while obtaining a battery dump.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The inspection command could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The inspection command exited unsuccessfully.
    #[error("adb command failed (exit code {code:?}): {stderr}")]
    Failed {
        /// Process exit code, if any.
        code: Option<i32>,
        /// Captured stderr, trimmed.
        stderr: String,
    },
    /// The inspection command did not finish in time.
    #[error("adb command timed out after {seconds}s")]
    Timeout {
        /// Timeout budget in seconds.
        seconds: u64,
    },
}

/// Something that can produce `dumpsys battery` text.
#[async_trait]
pub trait BatterySource: Send + Sync {
    /// Return the full raw diagnostic text for one reading.
    async fn read_dump(&self) -> Result<String, SourceError>;
}

/// Reads the battery dump of the single attached device via `adb`.
#[derive(Debug, Clone)]
pub struct AdbSource {
    program: PathBuf,
    timeout: Duration,
}

impl AdbSource {
    /// Create a source invoking `program` (usually `adb`) with a time budget.
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl Default for AdbSource {
    fn default() -> Self {
        Self::new("adb", DEFAULT_ADB_TIMEOUT)
    }
}

#[async_trait]
impl BatterySource for AdbSource {
    async fn read_dump(&self) -> Result<String, SourceError> {
        debug!(program = %self.program.display(), "querying device battery");

        let child = tokio::process::Command::new(&self.program)
            .args(["shell", "dumpsys", "battery"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| SourceError::Timeout {
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|source| SourceError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
