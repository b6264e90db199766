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

//! Security property derivation.
//!
//! - `discovery`: locate the fixed-name files under a security root
//! - `logging`: translate `logging.xml` into logging-plugin properties
//! - `options`: top-level entry point combining both

use crate::engine_core::errors::SecurityConfigError;

pub mod discovery;
pub mod logging;
pub mod options;

pub(crate) fn ensure_security_available() -> Result<(), SecurityConfigError> {
    if cfg!(feature = "security") {
        Ok(())
    } else {
        Err(SecurityConfigError::SecurityUnavailable)
    }
}
