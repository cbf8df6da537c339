/*
 *     Copyright 2026 The Hostport Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use hostport_core::error::{ErrorType, OrErr};
use hostport_core::Result;
use rolling_file::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{time::ChronoLocal, Layer},
    prelude::*,
    EnvFilter, Registry,
};

/// init_tracing installs the global subscriber, writing compact logs to an hourly
/// rolling file under log_dir and pretty logs to stdout when verbose is set. The
/// returned guards flush the non-blocking writers when dropped.
pub fn init_tracing(
    name: &str,
    log_dir: &Path,
    log_level: Level,
    log_max_files: usize,
    verbose: bool,
) -> Result<Vec<WorkerGuard>> {
    let mut guards = vec![];

    // Setup stdout layer.
    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let stdout_filter = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let stdout_logging_layer = Layer::new()
        .with_writer(stdout_writer)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_timer(ChronoLocal::rfc_3339())
        .pretty()
        .with_filter(stdout_filter);
    guards.push(stdout_guard);

    // Setup file layer, skipped when the log directory is not writable.
    let rolling_appender = fs::create_dir_all(log_dir).and_then(|_| {
        BasicRollingFileAppender::new(
            log_dir.join(name).with_extension("log"),
            RollingConditionBasic::new().hourly(),
            log_max_files,
        )
    });

    let (file_logging_layer, file_error) = match rolling_appender {
        Ok(rolling_appender) => {
            let (rolling_writer, rolling_writer_guard) =
                tracing_appender::non_blocking(rolling_appender);
            guards.push(rolling_writer_guard);

            let layer = Layer::new()
                .with_writer(rolling_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_thread_names(false)
                .with_thread_ids(false)
                .with_timer(ChronoLocal::rfc_3339())
                .compact();
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    // Setup env filter for log level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(file_logging_layer)
        .with(stdout_logging_layer);

    tracing::subscriber::set_global_default(subscriber)
        .or_context(ErrorType::TracingError, "failed to set global subscriber")?;

    match file_error {
        Some(err) => warn!(
            "file logging disabled, can not use log directory {}: {}",
            log_dir.display(),
            err
        ),
        None => info!(
            "tracing initialized directory: {}, level: {}",
            log_dir.display(),
            log_level
        ),
    }

    Ok(guards)
}
