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

//! dds-security-config: DDS Security property derivation.
//!
//! This library turns a security root directory (credentials, governance and
//! permissions documents, plus an optional `logging.xml`) into the ordered
//! name/value properties consumed by the DDS Security plugins of an RTPS
//! transport.

pub mod config;
pub mod engine_core;
pub mod profiles;
pub mod security;
pub mod utils;

pub use engine_core::errors::SecurityConfigError;
pub use engine_core::models::{Property, PropertyPolicy, PropertySeq, SecurityFiles, SecurityOptions};
pub use security::logging::{
    apply_logging_configuration_from_file, parse_logging_configuration, parse_logging_xml,
};
pub use security::options::apply_security_options;
