//! Runtime configuration assembled from the command line

use std::path::PathBuf;
use std::time::Duration;

use crate::viewport::ViewportPolicy;

/// Simulated latencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay before an assist lookup produces its response
    pub assist_latency: Duration,
    /// Delay before the assist panel follows up on a sent suggestion
    pub follow_up_latency: Duration,
    /// Delay before the customer answers an agent message
    pub reply_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            assist_latency: Duration::from_millis(1500),
            follow_up_latency: Duration::from_millis(2000),
            reply_delay: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub timings: Timings,
    pub viewport: ViewportPolicy,
    /// Load conversations from this JSON file instead of the built-in sample
    pub conversations: Option<PathBuf>,
}
