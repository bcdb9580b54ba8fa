// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing events to stdout.
///
/// `level` accepts anything `EnvFilter` does, from a plain level (`debug`) to per-crate
/// directives. Fails if the directives cannot be parsed or a global subscriber is already set.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(level)?;
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not set the global subscriber: {e}"))
}
