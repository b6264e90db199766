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

//! DDS Security constants - Single source of truth for file names and property names.
//!
//! Property names and plugin identifiers form the contract with the
//! downstream security plugins and must not change.

/// Fixed file names expected under a security root
pub mod files {
    pub const IDENTITY_CA_CERT: &str = "identity_ca.cert.pem";
    pub const PERMISSIONS_CA_CERT: &str = "permissions_ca.cert.pem";
    pub const GOVERNANCE: &str = "governance.p7s";
    pub const CERT: &str = "cert.pem";
    pub const KEY: &str = "key.pem";
    pub const PERMISSIONS: &str = "permissions.p7s";
    /// Optional; its absence disables security logging configuration only
    pub const LOGGING: &str = "logging.xml";
}

/// Authentication plugin (PKI-DH)
pub mod auth {
    pub const PLUGIN_PROPERTY: &str = "dds.sec.auth.plugin";
    pub const PLUGIN: &str = "builtin.PKI-DH";
    pub const IDENTITY_CA_PROPERTY: &str = "dds.sec.auth.builtin.PKI-DH.identity_ca";
    pub const IDENTITY_CERTIFICATE_PROPERTY: &str =
        "dds.sec.auth.builtin.PKI-DH.identity_certificate";
    pub const PRIVATE_KEY_PROPERTY: &str = "dds.sec.auth.builtin.PKI-DH.private_key";
}

/// Cryptographic plugin (AES-GCM-GMAC)
pub mod crypto {
    pub const PLUGIN_PROPERTY: &str = "dds.sec.crypto.plugin";
    pub const PLUGIN: &str = "builtin.AES-GCM-GMAC";
}

/// Access control plugin (Access-Permissions)
pub mod access {
    pub const PLUGIN_PROPERTY: &str = "dds.sec.access.plugin";
    pub const PLUGIN: &str = "builtin.Access-Permissions";
    pub const PERMISSIONS_CA_PROPERTY: &str =
        "dds.sec.access.builtin.Access-Permissions.permissions_ca";
    pub const GOVERNANCE_PROPERTY: &str = "dds.sec.access.builtin.Access-Permissions.governance";
    pub const PERMISSIONS_PROPERTY: &str =
        "dds.sec.access.builtin.Access-Permissions.permissions";
}

/// Logging plugin (DDS_LogTopic)
pub mod logging {
    pub const PLUGIN_PROPERTY: &str = "dds.sec.log.plugin";
    pub const PLUGIN: &str = "builtin.DDS_LogTopic";
    pub const LOG_FILE_PROPERTY: &str = "dds.sec.log.builtin.DDS_LogTopic.log_file";
    pub const VERBOSITY_PROPERTY: &str = "dds.sec.log.builtin.DDS_LogTopic.event_log_level";
    pub const DISTRIBUTE_ENABLE_PROPERTY: &str = "dds.sec.log.builtin.DDS_LogTopic.distribute";
    /// Shared by QoS profile expansion and the explicit `depth` override
    pub const DISTRIBUTE_DEPTH_PROPERTY: &str =
        "com.rti.serv.secure.logging.distribute.writer_history_depth";
}

/// Element names of the logging XML document
pub mod xml_tags {
    pub const ROOT: &str = "security_log";
    pub const FILE: &str = "file";
    pub const VERBOSITY: &str = "verbosity";
    pub const DISTRIBUTE: &str = "distribute";
    pub const QOS: &str = "qos";
    pub const PROFILE: &str = "profile";
    pub const DEPTH: &str = "depth";
}

/// URI scheme prefixed to discovered file paths
pub const FILE_URI_PREFIX: &str = "file://";

/// Configuration Environment Variables
pub mod config {
    pub const ENV_SECURITY_ROOT: &str = "DDS_SECURITY_ROOT";
    pub const ENV_ENFORCE_SECURITY: &str = "DDS_SECURITY_ENFORCE";
    pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
}
