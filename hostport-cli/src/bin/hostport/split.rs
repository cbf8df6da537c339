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

use clap::{Parser, ValueEnum};
use hostport_core::error::{ErrorType, OrErr};
use hostport_core::Result;
use hostport_util::net::{split_host_port_with_presence, SplitHostPort};
use serde::Serialize;
use tracing::{error, info, instrument};


/// Format is the output format of the split command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Text prints the host and the port on separate lines.
    #[default]
    Text,

    /// Json prints a json object.
    Json,
}

// SplitOutput is the json output of the split command.
#[derive(Debug, Serialize)]
struct SplitOutput<'a> {
    host: &'a str,
    port: Option<&'a str>,
    has_port: bool,
}

/// render_port renders a port for text output, quoting it so that an empty port
/// stays distinguishable from a missing one.
pub fn render_port(port: Option<&str>) -> String {
    match port {
        Some(port) => format!("{:?}", port),
        None => "none".to_string(),
    }
}

// SplitCommand is the subcommand of split.
#[derive(Debug, Clone, Parser)]
pub struct SplitCommand {
    #[arg(help = "Specify the endpoint to split, e.g. host:port, [host] or [host]:port")]
    name: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value_t = Format::Text,
        help = "Specify the output format"
    )]
    format: Format,
}

impl SplitCommand {
    // execute executes the split command.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<()> {
        match self.run() {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(err) => {
                error!("split {} failed: {}", self.name, err);
                Err(err)
            }
        }
    }

    // run splits the endpoint and renders the output.
    fn run(&self) -> Result<String> {
        let split = split_host_port_with_presence(&self.name)?;
        info!(
            "split {} into host {} and port {:?}",
            self.name, split.host, split.port
        );

        self.render(&split)
    }

    // render renders the split endpoint in the requested format.
    fn render(&self, split: &SplitHostPort<'_>) -> Result<String> {
        match self.format {
            Format::Text => Ok(format!(
                "host: {:?}\nport: {}",
                split.host,
                render_port(split.port)
            )),
            Format::Json => {
                let output = SplitOutput {
                    host: split.host,
                    port: split.port,
                    has_port: split.port.is_some(),
                };

                Ok(serde_json::to_string(&output).or_err(ErrorType::SerializeError)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostport_core::Error;

    fn split(args: &[&str]) -> Result<String> {
        let mut argv = vec!["split"];
        argv.extend_from_slice(args);
        SplitCommand::try_parse_from(argv).unwrap().run()
    }

    #[test]
    fn test_split_command_text() {
        assert_eq!(split(&["[::1]:80"]).unwrap(), "host: \"::1\"\nport: \"80\"");
        assert_eq!(split(&["[::1]"]).unwrap(), "host: \"::1\"\nport: none");
        assert_eq!(
            split(&["example.com:"]).unwrap(),
            "host: \"example.com\"\nport: \"\""
        );
        assert_eq!(split(&[""]).unwrap(), "host: \"\"\nport: none");
    }

    #[test]
    fn test_split_command_json() {
        assert_eq!(
            split(&["--format", "json", "host.example.com:80"]).unwrap(),
            r#"{"host":"host.example.com","port":"80","has_port":true}"#
        );
        assert_eq!(
            split(&["-f", "json", "2001:db8::1"]).unwrap(),
            r#"{"host":"2001:db8::1","port":null,"has_port":false}"#
        );
    }

    #[test]
    fn test_split_command_failure() {
        let err = split(&["[bad"]).unwrap_err();
        assert!(err.is_parse_error());

        let err = split(&["[nocolonhost]"]).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_split_command_execute_returns_error() {
        let command = SplitCommand::try_parse_from(["split", "[::1]x"]).unwrap();
        let err = command.execute().unwrap_err();
        assert!(matches!(err, Error::InvalidTrailingCharacter(_)));

        let command = SplitCommand::try_parse_from(["split", "[::1]:80"]).unwrap();
        assert!(command.execute().is_ok());
    }

    #[test]
    fn test_render_port() {
        assert_eq!(render_port(Some("80")), "\"80\"");
        assert_eq!(render_port(Some("")), "\"\"");
        assert_eq!(render_port(None), "none");
    }
}
