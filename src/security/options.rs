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

use crate::engine_core::constants::{access, auth, crypto};
use crate::engine_core::errors::SecurityConfigError;
use crate::engine_core::models::{Property, PropertyPolicy, PropertySeq, SecurityFiles, SecurityOptions};
use crate::security::discovery::discover;
use crate::security::logging::parse_logging_configuration;
use crate::utils::fs::path_to_uri;
use tracing::{info, warn};

/// Authentication, cryptography and access-control plugin properties for
/// the discovered files. Names are distinct, so entries are appended as-is.
pub fn security_properties(files: &SecurityFiles) -> PropertySeq {
    let mut properties = PropertySeq::new();
    properties.push(Property::new(auth::PLUGIN_PROPERTY, auth::PLUGIN));
    properties.push(Property::new(
        auth::IDENTITY_CA_PROPERTY,
        path_to_uri(&files.identity_ca_cert_path),
    ));
    properties.push(Property::new(
        auth::IDENTITY_CERTIFICATE_PROPERTY,
        path_to_uri(&files.cert_path),
    ));
    properties.push(Property::new(
        auth::PRIVATE_KEY_PROPERTY,
        path_to_uri(&files.key_path),
    ));
    properties.push(Property::new(crypto::PLUGIN_PROPERTY, crypto::PLUGIN));
    properties.push(Property::new(access::PLUGIN_PROPERTY, access::PLUGIN));
    properties.push(Property::new(
        access::PERMISSIONS_CA_PROPERTY,
        path_to_uri(&files.permissions_ca_cert_path),
    ));
    properties.push(Property::new(
        access::GOVERNANCE_PROPERTY,
        path_to_uri(&files.governance_path),
    ));
    properties.push(Property::new(
        access::PERMISSIONS_PROPERTY,
        path_to_uri(&files.permissions_path),
    ));
    properties
}

/// Apply the security options of one participant to `policy`.
///
/// - No security root: nothing to do.
/// - Files missing: error when `enforce_security` is set, otherwise security
///   stays disabled and `policy` is left untouched.
/// - Invalid `logging.xml`: error; `policy` is left untouched.
pub fn apply_security_options(
    options: &SecurityOptions,
    policy: &mut PropertyPolicy,
) -> Result<(), SecurityConfigError> {
    let Some(root) = options.security_root_path.as_deref() else {
        return Ok(());
    };

    super::ensure_security_available()?;

    let files = match discover(root) {
        Ok(files) => files,
        Err(e) if e.is_discovery_failure() && !options.enforce_security => {
            warn!(error = %e, "Security files incomplete, security disabled for this participant");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let logging_properties = match files.logging_path.as_deref() {
        Some(path) => Some(parse_logging_configuration(path)?),
        None => None,
    };

    let properties = policy.properties_mut();
    for property in security_properties(&files) {
        properties.push(property);
    }
    if let Some(logging_properties) = logging_properties {
        properties.merge_from(logging_properties);
    }

    info!(
        root = %root.display(),
        count = properties.len(),
        logging = files.logging_path.is_some(),
        "Applied security options"
    );

    Ok(())
}
