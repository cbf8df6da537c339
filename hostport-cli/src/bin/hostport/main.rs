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

use clap::{Parser, Subcommand};
use hostport_cli::tracing::init_tracing;
use hostport_config::{hostport, CARGO_PKG_VERSION};
use hostport_core::Result;
use std::path::PathBuf;
use termion::{color, style};
use tracing::Level;

pub mod check;
pub mod join;
pub mod split;

#[derive(Debug, Parser)]
#[command(
    name = hostport::NAME,
    author,
    version = CARGO_PKG_VERSION,
    about = "hostport joins and splits host:port endpoint strings.",
    long_about = "A command line that joins a host and a port into an endpoint string, bracketing IPv6 literals, \
    and splits endpoint strings such as host:port, [host] or [host]:port back into their host and port."
)]
struct Args {
    #[arg(
        short = 'l',
        long,
        default_value = "info",
        help = "Specify the logging level [trace, debug, info, warn, error]"
    )]
    log_level: Level,

    #[arg(
        long,
        default_value_os_t = hostport::default_hostport_log_dir(),
        help = "Specify the log directory"
    )]
    log_dir: PathBuf,

    #[arg(
        long,
        default_value_t = 6,
        help = "Specify the max number of log files"
    )]
    log_max_files: usize,

    #[arg(
        long = "verbose",
        default_value_t = false,
        help = "Specify whether to print log"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(
        name = "join",
        author,
        version,
        about = "Join a host and a port into an endpoint",
        long_about = "Join a host and a port into host:port. A host containing a colon is bracketed as [host]:port unless it is already bracketed."
    )]
    Join(join::JoinCommand),

    #[command(
        name = "split",
        author,
        version,
        about = "Split an endpoint into its host and port",
        long_about = "Split an endpoint of the form host, host:port, [host] or [host]:port into its host and port, reporting whether a port was present."
    )]
    Split(split::SplitCommand),

    #[command(
        name = "check",
        author,
        version,
        about = "Check the endpoints of a configuration file",
        long_about = "Load the endpoints of a configuration file and split each of them. Fails if any endpoint is malformed, or lacks a port when ports are required."
    )]
    Check(check::CheckCommand),
}

impl Command {
    // title returns the title of the failure banner of the command.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Join(_) => "Joining",
            Self::Split(_) => "Splitting",
            Self::Check(_) => "Checking",
        }
    }

    pub fn execute(self) -> Result<()> {
        match self {
            Self::Join(cmd) => cmd.execute(),
            Self::Split(cmd) => cmd.execute(),
            Self::Check(cmd) => cmd.execute(),
        }
    }
}

/// print_failure prints the failure banner of a command with its message to stderr.
pub fn print_failure(title: &str, message: &str) {
    eprintln!(
        "{}{}{}{} Failed!{}",
        color::Fg(color::Red),
        style::Italic,
        style::Bold,
        title,
        style::Reset,
    );

    eprintln!(
        "{}{}{}****************************************{}",
        color::Fg(color::Black),
        style::Italic,
        style::Bold,
        style::Reset
    );

    eprintln!(
        "{}{}{}Message:{} {}",
        color::Fg(color::Red),
        style::Italic,
        style::Bold,
        style::Reset,
        message
    );

    eprintln!(
        "{}{}{}****************************************{}",
        color::Fg(color::Black),
        style::Italic,
        style::Bold,
        style::Reset
    );
}

fn main() {
    // Parse command line arguments.
    let args = Args::parse();

    // Initialize tracing.
    let guards = match init_tracing(
        hostport::NAME,
        &args.log_dir,
        args.log_level,
        args.log_max_files,
        args.verbose,
    ) {
        Ok(guards) => guards,
        Err(err) => {
            print_failure("Initializing", &err.to_string());
            std::process::exit(1);
        }
    };

    // Execute the command.
    let title = args.command.title();
    let result = args.command.execute();

    // Flush the non-blocking log writers, exit skips destructors.
    drop(guards);

    if let Err(err) = result {
        print_failure(title, &err.to_string());
        std::process::exit(1);
    }
}
