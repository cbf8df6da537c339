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

use std::path::PathBuf;

pub mod hostport;

/// CARGO_PKG_VERSION is the version of the cargo package.
pub const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// home_dir returns the home directory of the current user, falling back to
/// the temporary directory when it can not be determined.
#[cfg(target_os = "macos")]
fn home_dir() -> PathBuf {
    home::home_dir().unwrap_or_else(std::env::temp_dir)
}

/// default_config_dir is the default config directory.
pub fn default_config_dir() -> PathBuf {
    #[cfg(not(target_os = "macos"))]
    return PathBuf::from("/etc/hostport/");

    #[cfg(target_os = "macos")]
    return home_dir().join(".hostport").join("config");
}

/// default_log_dir is the default log directory.
pub fn default_log_dir() -> PathBuf {
    #[cfg(not(target_os = "macos"))]
    return PathBuf::from("/var/log/hostport/");

    #[cfg(target_os = "macos")]
    return home_dir().join(".hostport").join("logs");
}
