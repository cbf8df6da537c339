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

use clap::Parser;
use hostport_config::hostport::Config;
use hostport_core::{Error, Result};
use hostport_util::net::split_host_port_with_presence;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

use super::split::render_port;
use super::*;

// CheckCommand is the subcommand of check.
#[derive(Debug, Clone, Parser)]
pub struct CheckCommand {
    #[arg(
        short = 'c',
        long = "config",
        default_value_os_t = hostport::default_hostport_config_path(),
        help = "Specify the configuration file to check"
    )]
    config: PathBuf,
}

impl CheckCommand {
    // execute executes the check command.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<()> {
        match self.run() {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }

                Ok(())
            }
            Err(err) => {
                error!("check {} failed: {}", self.config.display(), err);
                Err(err)
            }
        }
    }

    // run loads the configuration and checks its endpoints.
    fn run(&self) -> Result<Vec<String>> {
        let config = load_config(&self.config)?;
        check_endpoints(&config)
    }
}

// load_config loads the configuration from the path.
fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    info!(
        "check {} endpoints from {}",
        config.endpoints.len(),
        path.display()
    );

    Ok(config)
}

/// check_endpoints splits every endpoint of the configuration and returns one line
/// per endpoint. Endpoints without a port are rejected when ports are required.
pub fn check_endpoints(config: &Config) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(config.endpoints.len());
    let mut missing_port = Vec::new();
    for endpoint in &config.endpoints {
        let split = split_host_port_with_presence(endpoint)?;
        if config.require_port && split.port.is_none() {
            missing_port.push(endpoint.as_str());
            continue;
        }

        lines.push(format!(
            "{} => host: {:?}, port: {}",
            endpoint,
            split.host,
            render_port(split.port)
        ));
    }

    if !missing_port.is_empty() {
        return Err(Error::ValidationError(format!(
            "endpoints without port: {}",
            missing_port.join(", ")
        )));
    }

    Ok(lines)
}
