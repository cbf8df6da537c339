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
use hostport_util::net::split_host_port_with_presence;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

/// NAME is the name of the hostport command line.
pub const NAME: &str = "hostport";

/// default_hostport_config_path is the default config path for hostport.
#[inline]
pub fn default_hostport_config_path() -> PathBuf {
    crate::default_config_dir().join("hostport.yaml")
}

/// default_hostport_log_dir is the default log directory for hostport.
#[inline]
pub fn default_hostport_log_dir() -> PathBuf {
    crate::default_log_dir().join(NAME)
}

/// validate_endpoints rejects endpoints that can not be split into host and port.
fn validate_endpoints(endpoints: &[String]) -> std::result::Result<(), ValidationError> {
    for endpoint in endpoints {
        if let Err(err) = split_host_port_with_presence(endpoint) {
            let mut validation_error = ValidationError::new("endpoint");
            validation_error.message = Some(Cow::Owned(err.to_string()));
            validation_error.add_param(Cow::Borrowed("value"), endpoint);
            return Err(validation_error);
        }
    }

    Ok(())
}

/// Config is the configuration for hostport.
#[derive(Debug, Clone, Default, Validate, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// endpoints is the list of endpoints in the form of `host`, `host:port`,
    /// `[host]` or `[host]:port`.
    #[validate(length(min = 1), custom = "validate_endpoints")]
    pub endpoints: Vec<String>,

    /// require_port indicates whether every endpoint must carry a port field.
    pub require_port: bool,
}

impl Config {
    /// load loads configuration from file.
    #[instrument(skip_all)]
    pub fn load(path: &Path) -> Result<Config> {
        // Load configuration from file.
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content).or_err(ErrorType::ConfigError)?;
        info!("load config from {}", path.display());

        // Validate configuration.
        config.validate().or_err(ErrorType::ValidationError)?;
        Ok(config)
    }
}
