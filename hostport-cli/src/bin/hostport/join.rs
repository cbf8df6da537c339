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
use hostport_core::Result;
use hostport_util::net::join_host_port;
use tracing::{info, instrument};

// JoinCommand is the subcommand of join.
#[derive(Debug, Clone, Parser)]
pub struct JoinCommand {
    #[arg(help = "Specify the host, a host containing a colon is bracketed")]
    host: String,

    #[arg(allow_negative_numbers = true, help = "Specify the port")]
    port: i32,
}

impl JoinCommand {
    // execute executes the join command.
    #[instrument(skip_all)]
    pub fn execute(&self) -> Result<()> {
        let endpoint = self.run();
        info!("join {} and {} into {}", self.host, self.port, endpoint);
        println!("{}", endpoint);
        Ok(())
    }

    // run joins the host and the port.
    fn run(&self) -> String {
        join_host_port(&self.host, self.port)
    }
}
