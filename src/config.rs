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

use crate::engine_core::constants::config::{
    ENV_ENFORCE_SECURITY, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_SECURITY_ROOT,
};
use crate::engine_core::errors::SecurityConfigError;
use crate::engine_core::models::SecurityOptions;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Result<Self, SecurityConfigError> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(SecurityConfigError::Configuration(format!(
                "unknown log format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub security_root: Option<PathBuf>,
    pub enforce_security: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, SecurityConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SecurityConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::Text,
        };

        Ok(Self {
            security_root: lookup(ENV_SECURITY_ROOT)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            enforce_security: lookup(ENV_ENFORCE_SECURITY)
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(|| "info".to_string()),
            log_format,
        })
    }

    pub fn security_options(&self) -> SecurityOptions {
        SecurityOptions {
            security_root_path: self.security_root.clone(),
            enforce_security: self.enforce_security,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            security_root: None,
            enforce_security: false,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
