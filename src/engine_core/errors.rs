// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Domain error types - every fallible operation returns one of these

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for security property derivation
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SecurityConfigError {
    /// A mandatory credential or policy file is not readable under the root
    #[error("couldn't find all security files: '{file_name}' is not readable under {}", .root.display())]
    MissingSecurityFile {
        root: PathBuf,
        file_name: &'static str,
    },

    /// Logging file unreadable, malformed, or lacking the `security_log` root
    #[error("logger xml file missing 'security_log'")]
    MissingSecurityLog,

    /// A present element has no text content
    #[error("failed to set security logging {tag}: improper format")]
    ImproperFormat { tag: &'static str },

    /// `qos/profile` names a profile outside the registry
    #[error("failed to set security logging profile: {0} is not a supported profile")]
    UnsupportedProfile(String),

    /// Built without the `security` feature
    #[error("security support is not available; rebuild with the `security` feature enabled")]
    SecurityUnavailable,

    /// Invalid process configuration (environment or CLI)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SecurityConfigError {
    /// True for failures that only disable security when it is not enforced.
    pub fn is_discovery_failure(&self) -> bool {
        matches!(self, SecurityConfigError::MissingSecurityFile { .. })
    }
}
