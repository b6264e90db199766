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

use crate::engine_core::constants::files;
use crate::engine_core::errors::SecurityConfigError;
use crate::engine_core::models::SecurityFiles;
use crate::utils::fs::security_file_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locate every security file under `root`.
///
/// All six credential and policy files are mandatory; the first one that is
/// not readable fails the whole discovery. `logging.xml` is optional.
pub fn discover(root: &Path) -> Result<SecurityFiles, SecurityConfigError> {
    let required = |file_name: &'static str| -> Result<PathBuf, SecurityConfigError> {
        security_file_path(root, file_name).ok_or_else(|| SecurityConfigError::MissingSecurityFile {
            root: root.to_path_buf(),
            file_name,
        })
    };

    let security_files = SecurityFiles {
        identity_ca_cert_path: required(files::IDENTITY_CA_CERT)?,
        permissions_ca_cert_path: required(files::PERMISSIONS_CA_CERT)?,
        governance_path: required(files::GOVERNANCE)?,
        cert_path: required(files::CERT)?,
        key_path: required(files::KEY)?,
        permissions_path: required(files::PERMISSIONS)?,
        logging_path: security_file_path(root, files::LOGGING),
    };

    debug!(
        root = %root.display(),
        logging = security_files.logging_path.is_some(),
        "Discovered security files"
    );

    Ok(security_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANDATORY: [&str; 6] = [
        files::IDENTITY_CA_CERT,
        files::PERMISSIONS_CA_CERT,
        files::GOVERNANCE,
        files::CERT,
        files::KEY,
        files::PERMISSIONS,
    ];

    fn populate(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(name), b"-").unwrap();
        }
    }

    #[test]
    fn test_discover_all_files() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), &MANDATORY);
        populate(dir.path(), &[files::LOGGING]);

        let found = discover(dir.path()).unwrap();
        assert!(found.key_path.ends_with(files::KEY));
        assert!(found.governance_path.ends_with(files::GOVERNANCE));
        assert!(found.logging_path.unwrap().ends_with(files::LOGGING));
    }

    #[test]
    fn test_logging_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), &MANDATORY);

        let found = discover(dir.path()).unwrap();
        assert!(found.logging_path.is_none());
    }

    #[test]
    fn test_each_mandatory_file_is_required() {
        for missing in MANDATORY {
            let dir = tempfile::tempdir().unwrap();
            let present: Vec<&str> = MANDATORY.iter().copied().filter(|n| *n != missing).collect();
            populate(dir.path(), &present);

            match discover(dir.path()) {
                Err(SecurityConfigError::MissingSecurityFile { file_name, .. }) => {
                    assert_eq!(file_name, missing)
                }
                other => panic!("expected missing {}, got {:?}", missing, other),
            }
        }
    }
}
