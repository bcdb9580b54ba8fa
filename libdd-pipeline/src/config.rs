// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::time::Duration;
use tracing::warn;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_GENERATOR_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Directives passed to the log filter, e.g. `debug` or `libdd_filter=trace,info`.
    pub log_level: String,
    pub generator_interval: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            generator_interval: DEFAULT_GENERATOR_INTERVAL,
        }
    }
}

impl PipelineConfig {
    /// Reads `DD_PIPELINE_LOG_LEVEL` and `DD_PIPELINE_GENERATOR_INTERVAL_MS`. Unset or invalid
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup("DD_PIPELINE_LOG_LEVEL")
            .map(|val| val.trim().to_lowercase())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let generator_interval = match lookup("DD_PIPELINE_GENERATOR_INTERVAL_MS") {
            None => DEFAULT_GENERATOR_INTERVAL,
            Some(val) => match val.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!(
                        "Invalid DD_PIPELINE_GENERATOR_INTERVAL_MS value {val:?}, using default of {}ms",
                        DEFAULT_GENERATOR_INTERVAL.as_millis()
                    );
                    DEFAULT_GENERATOR_INTERVAL
                }
            },
        };

        PipelineConfig {
            log_level,
            generator_interval,
        }
    }
}
