//! Configuration options for the team balancer.
//!
//! The options only decide how the search is executed. Every execution mode
//! visits the same candidates and returns the same pair.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default capacity of the producer/consumer hand-off channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 200;

/// How the exhaustive search is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Enumerate and score inline on the calling thread.
    #[default]
    Sequential,
    /// One producer thread enumerates candidates into a bounded channel,
    /// the calling thread scores them.
    Pipelined,
    /// Split the outermost category's combinations across a rayon pool.
    Parallel,
}

impl std::str::FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "pipelined" => Ok(ExecutionMode::Pipelined),
            "parallel" => Ok(ExecutionMode::Parallel),
            other => Err(ConfigError::InvalidValue {
                field: "mode".to_string(),
                message: format!("unknown execution mode '{}'", other),
            }),
        }
    }
}

/// Configuration for the team balancer.
///
/// # Example
/// ```
/// use team_balancer::balance::{BalanceConfig, ExecutionMode};
///
/// let config = BalanceConfig::default().with_mode(ExecutionMode::Pipelined);
/// assert_eq!(config.channel_capacity, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Execution strategy for the search.
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Bound on candidates buffered between producer and consumer.
    ///
    /// Only used by [`ExecutionMode::Pipelined`].
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Number of worker threads for [`ExecutionMode::Parallel`].
    ///
    /// Set to `None` to use rayon's global pool.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            num_threads: None,
        }
    }
}

impl BalanceConfig {
    /// Create a new BalanceConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set execution mode.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set hand-off channel capacity.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "channel_capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "num_threads".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }

        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    IoError(String),
    /// The configuration is not valid JSON for [`BalanceConfig`].
    ParseError(String),
    /// A field holds an unusable value.
    InvalidValue {
        /// Name of the field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics tracked during a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceStats {
    /// Candidates scored so far.
    pub candidates: u64,

    /// Times a candidate replaced the best so far.
    ///
    /// In parallel mode each worker counts against its own best.
    pub improvements: u64,

    /// Candidates whose wings were swapped to even out team sizes.
    pub size_swaps: u64,

    /// Lowest score seen so far, if any candidate was scored.
    pub best_score: Option<f64>,

    /// Total time spent searching (in seconds).
    pub elapsed_seconds: f64,

    /// Candidates scored per second.
    pub candidates_per_second: f64,
}

impl BalanceStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update candidates per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.candidates_per_second = self.candidates as f64 / self.elapsed_seconds;
        }
    }

    /// Fold another worker's counters into these.
    pub fn merge(&mut self, other: &BalanceStats) {
        self.candidates += other.candidates;
        self.improvements += other.improvements;
        self.size_swaps += other.size_swaps;
        self.best_score = match (self.best_score, other.best_score) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }
}
