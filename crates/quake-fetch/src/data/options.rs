use std::time::Duration;

/// Time allowed to establish the connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Time allowed between reads of the response body.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Connect and read timeouts for the single GET.
///
/// These are the only cancellation mechanism; there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read:    Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT_TIMEOUT,
            read:    DEFAULT_READ_TIMEOUT,
        }
    }
}

/// How line terminators in the response body are treated while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Keep the body text exactly as received.
    #[default]
    Preserve,

    /// Drop `\r` and `\n`, concatenating lines without a separator.
    ///
    /// Matches feeds consumed by line-reading clients; JSON parsing is
    /// unaffected unless a string literal spans lines.
    JoinLines,
}

/// Configuration for a fetch.
///
/// The defaults are the fixed values of the reference client: 15 s to
/// connect, 10 s per read, body text preserved.
///
/// # Examples
///
/// ```
/// use quake_fetch::{FetchOptions, LineMode};
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .connect_timeout(Duration::from_secs(5))
///     .line_mode(LineMode::JoinLines);
/// assert_eq!(options.timeouts.read, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    /// Applied when the pipeline builds its own client.
    pub timeouts:  Timeouts,
    pub line_mode: LineMode,
}

impl FetchOptions {
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connect = timeout;
        self
    }

    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.read = timeout;
        self
    }

    #[must_use]
    pub fn line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }
}
