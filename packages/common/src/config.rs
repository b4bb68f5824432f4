use serde::Deserialize;

/// Configuration for the recurring-contest generation sweep.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Seconds between sweep runs. Default: 3600 (hourly).
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_sweep_interval_secs() -> u64 {
    3600
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}
