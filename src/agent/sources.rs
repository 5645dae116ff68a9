//! Value sources backing the standard OIDs

use std::time::Instant;

use rand::Rng;

/// Produces the current value of one OID.
pub trait ValueSource: Send + Sync {
    /// Read the current value as wire text.
    fn read(&self) -> String;
}

impl<F> ValueSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn read(&self) -> String {
        self()
    }
}

/// Host name of the machine running the agent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemName;

impl SystemName {
    /// Reported when the host name is empty or not valid UTF-8.
    pub const FALLBACK: &'static str = "unknown-system";
}

impl ValueSource for SystemName {
    fn read(&self) -> String {
        match gethostname::gethostname().into_string() {
            Ok(name) if !name.is_empty() => name,
            _ => Self::FALLBACK.to_string(),
        }
    }
}

/// Whole seconds elapsed since the source was created.
#[derive(Debug, Clone, Copy)]
pub struct Uptime {
    started: Instant,
}

impl Uptime {
    /// Start counting from now.
    #[must_use]
    pub fn new() -> Self {
        Self::since(Instant::now())
    }

    /// Start counting from `started`.
    #[must_use]
    pub fn since(started: Instant) -> Self {
        Self { started }
    }

    /// Elapsed whole seconds.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

impl Default for Uptime {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for Uptime {
    fn read(&self) -> String {
        self.seconds().to_string()
    }
}

/// Placeholder CPU usage: a uniform random percentage in `[0, 100]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuLoad;

impl CpuLoad {
    /// Highest value ever reported.
    pub const MAX: u8 = 100;
}

impl ValueSource for CpuLoad {
    fn read(&self) -> String {
        rand::rng().random_range(0..=Self::MAX).to_string()
    }
}
