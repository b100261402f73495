//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress spinners
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Default log filter when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "ttt_minimax=debug,info"
        } else {
            "warn"
        }
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over the verbosity flag.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_log_level() {
        let quiet = CommonConfig::default();
        assert_eq!(quiet.default_filter(), "warn");

        let verbose = CommonConfig {
            verbose: true,
            ..CommonConfig::default()
        };
        assert!(verbose.default_filter().contains("debug"));
    }
}
