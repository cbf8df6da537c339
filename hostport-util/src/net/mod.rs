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

use hostport_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// join_host_port formats a host and port into `host:port`, adding brackets for IPv6 literals.
///
/// A host that already starts with `[` is taken as bracketed by the caller and is
/// left untouched. Neither the host nor the port is validated.
///
/// Examples:
/// - ("127.0.0.1", 80) -> "127.0.0.1:80"
/// - ("::1", 80) -> "[::1]:80"
/// - ("[::1]", 80) -> "[::1]:80"
pub fn join_host_port(host: &str, port: i32) -> String {
    if !host.starts_with('[') && host.contains(':') {
        // IPv6 literals must be enclosed in brackets.
        return format!("[{}]:{}", host, port);
    }

    format!("{}:{}", host, port)
}

/// SplitHostPort is a borrowed decomposition of an endpoint string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitHostPort<'a> {
    /// host is the host part, with brackets stripped.
    pub host: &'a str,

    /// port is the port part, None if the name carries no port field at all.
    /// An empty port field such as in `host:` is `Some("")`.
    pub port: Option<&'a str>,
}

/// split_host_port_with_presence splits a name into its host and port views,
/// reporting whether a port field was present.
///
/// The accepted forms are `host`, `host:port`, `[host]` and `[host]:port`. An
/// unbracketed name with zero or more than one colon is a bare host, which covers
/// hostnames and unbracketed IPv6 literals. A bracketed host must contain a colon,
/// since hostnames and IPv4 addresses are never bracketed.
pub fn split_host_port_with_presence(name: &str) -> Result<SplitHostPort<'_>> {
    let Some(bracketed) = name.strip_prefix('[') else {
        return Ok(match name.split_once(':') {
            Some((host, port)) if !port.contains(':') => SplitHostPort {
                host,
                port: Some(port),
            },
            _ => SplitHostPort {
                host: name,
                port: None,
            },
        });
    };

    let Some((host, trailing)) = bracketed.split_once(']') else {
        return Err(Error::UnmatchedBracket(name.to_string()));
    };

    let port = if trailing.is_empty() {
        None
    } else if let Some(port) = trailing.strip_prefix(':') {
        Some(port)
    } else {
        return Err(Error::InvalidTrailingCharacter(name.to_string()));
    };

    if !host.contains(':') {
        return Err(Error::BracketedHostNotIPv6Like(name.to_string()));
    }

    Ok(SplitHostPort { host, port })
}

/// split_host_port splits a name into host and port views without reporting
/// whether a port was present, a missing port is returned as an empty view.
pub fn split_host_port(name: &str) -> Result<(&str, &str)> {
    let split = split_host_port_with_presence(name)?;
    Ok((split.host, split.port.unwrap_or_default()))
}

/// split_host_port_owned splits a name into an owned HostPort, which outlives the name.
pub fn split_host_port_owned(name: &str) -> Result<HostPort> {
    let split = split_host_port_with_presence(name)?;
    Ok(HostPort {
        host: split.host.to_string(),
        port: split.port.map(str::to_string),
    })
}

/// HostPort is an owned host with an optional port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    // host is the host without brackets.
    host: String,

    // port is unset when the parsed name carried no port field.
    port: Option<String>,
}

impl HostPort {
    /// new returns a HostPort with the port formatted in decimal. A host the
    /// caller already bracketed, such as `[::1]`, is stored without its brackets.
    pub fn new(host: &str, port: i32) -> Self {
        let host = host
            .strip_prefix('[')
            .and_then(|host| host.strip_suffix(']'))
            .filter(|host| host.contains(':'))
            .unwrap_or(host);

        Self {
            host: host.to_string(),
            port: Some(port.to_string()),
        }
    }

    /// host returns the host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// port returns the port, None if no port field was present.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// has_port returns whether a port field was present.
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// into_parts consumes the HostPort and returns its host and port.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.host, self.port)
    }
}

// HostPort implements the Display, bracketing every host that contains a colon.
impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            write!(f, "{}", self.host)?;
        }

        match &self.port {
            Some(port) => write!(f, ":{}", port),
            None => Ok(()),
        }
    }
}

// HostPort implements the FromStr.
impl FromStr for HostPort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        split_host_port_owned(s)
    }
}
