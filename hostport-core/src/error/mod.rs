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

pub mod errors;

pub use errors::ErrorType;
pub use errors::ExternalError;
pub use errors::OrErr;

// HostPortError is the error for hostport.
#[derive(thiserror::Error, Debug)]
pub enum HostPortError {
    // UnmatchedBracket is the error when a bracketed name has no closing bracket.
    #[error("unmatched bracket in {0:?}")]
    UnmatchedBracket(String),

    // InvalidTrailingCharacter is the error when the closing bracket is followed
    // by something other than the end of the name or a colon.
    #[error("invalid character after closing bracket in {0:?}")]
    InvalidTrailingCharacter(String),

    // BracketedHostNotIPv6Like is the error when a bracketed host contains no colon.
    #[error("bracketed host in {0:?} does not contain a colon")]
    BracketedHostNotIPv6Like(String),

    // IO is the error for IO operation.
    #[error(transparent)]
    IO(#[from] std::io::Error),

    // ValidationError is the error for validate.
    #[error("validate failed: {0}")]
    ValidationError(String),

    // ExternalError is the error for external error.
    #[error(transparent)]
    ExternalError(#[from] ExternalError),
}

impl HostPortError {
    // is_parse_error returns true if the error is raised by splitting a name,
    // whichever of the malformed forms it was.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            HostPortError::UnmatchedBracket(_)
                | HostPortError::InvalidTrailingCharacter(_)
                | HostPortError::BracketedHostNotIPv6Like(_)
        )
    }
}
