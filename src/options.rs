/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of attempts, including the initial one. Must be >= 1;
    /// a value of 1 disables retries entirely.
    pub max_attempts: usize,
    /// Base retry delay in milliseconds (exponential strategy).
    pub base_delay_ms: u64,
    /// Upper bound on the computed delay in milliseconds, applied before jitter.
    pub max_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_attempts: 5,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
        }
    }
}
