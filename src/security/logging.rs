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

//! Security logging configuration.
//!
//! Translates a `logging.xml` document into logging-plugin properties:
//!
//! ```xml
//! <security_log version='1'>
//!   <file>/var/log/dds_security.log</file>
//!   <verbosity>CRITICAL</verbosity>
//!   <distribute>true</distribute>
//!   <qos>
//!     <profile>DEFAULT</profile>
//!     <depth>42</depth>
//!   </qos>
//! </security_log>
//! ```
//!
//! A QoS profile supplies defaults; explicit `qos` settings are applied after
//! it and win.

use crate::engine_core::constants::{logging, xml_tags};
use crate::engine_core::errors::SecurityConfigError;
use crate::engine_core::models::{Property, PropertySeq};
use crate::profiles::{self, QosProfile};
use crate::utils::xml::{XmlDocument, XmlElement};
use std::path::Path;
use tracing::debug;

/// Parse the logging file at `xml_file_path` and merge the result into
/// `properties`. Nothing is merged unless the whole document is valid.
pub fn apply_logging_configuration_from_file(
    xml_file_path: &Path,
    properties: &mut PropertySeq,
) -> Result<(), SecurityConfigError> {
    let new_properties = parse_logging_configuration(xml_file_path)?;
    debug!(
        count = new_properties.len(),
        "Merging security logging properties"
    );
    properties.merge_from(new_properties);
    Ok(())
}

/// Parse the logging file at `xml_file_path` into a fresh property list.
pub fn parse_logging_configuration(xml_file_path: &Path) -> Result<PropertySeq, SecurityConfigError> {
    super::ensure_security_available()?;

    let document = XmlDocument::load_file(xml_file_path).map_err(|e| {
        debug!(path = %xml_file_path.display(), error = %e, "Failed to load logging xml");
        SecurityConfigError::MissingSecurityLog
    })?;
    properties_from_document(&document)
}

/// Parse an in-memory logging document.
pub fn parse_logging_xml(xml: &str) -> Result<PropertySeq, SecurityConfigError> {
    super::ensure_security_available()?;

    let document = XmlDocument::parse(xml).map_err(|e| {
        debug!(error = %e, "Failed to parse logging xml");
        SecurityConfigError::MissingSecurityLog
    })?;
    properties_from_document(&document)
}

fn properties_from_document(document: &XmlDocument) -> Result<PropertySeq, SecurityConfigError> {
    let log_element = document
        .first_child_element(xml_tags::ROOT)
        .ok_or(SecurityConfigError::MissingSecurityLog)?;

    let mut properties = PropertySeq::new();
    properties.upsert(Property::new(logging::PLUGIN_PROPERTY, logging::PLUGIN));

    add_property_from_xml_element(
        &mut properties,
        logging::LOG_FILE_PROPERTY,
        log_element,
        xml_tags::FILE,
    )?;
    add_property_from_xml_element(
        &mut properties,
        logging::VERBOSITY_PROPERTY,
        log_element,
        xml_tags::VERBOSITY,
    )?;
    add_property_from_xml_element(
        &mut properties,
        logging::DISTRIBUTE_ENABLE_PROPERTY,
        log_element,
        xml_tags::DISTRIBUTE,
    )?;

    if let Some(qos_element) = log_element.first_child_element(xml_tags::QOS) {
        // Profile first so that explicit settings below override it
        if let Some(profile_element) = qos_element.first_child_element(xml_tags::PROFILE) {
            let name = profile_element
                .text()
                .ok_or(SecurityConfigError::ImproperFormat {
                    tag: xml_tags::PROFILE,
                })?;
            let profile = profiles::resolve(name)
                .ok_or_else(|| SecurityConfigError::UnsupportedProfile(name.to_string()))?;
            add_properties_from_qos_profile(&mut properties, profile);
        }

        add_property_from_xml_element(
            &mut properties,
            logging::DISTRIBUTE_DEPTH_PROPERTY,
            qos_element,
            xml_tags::DEPTH,
        )?;
    }

    Ok(properties)
}

/// Absent tag: no-op. Present tag without text: error.
fn add_property_from_xml_element(
    properties: &mut PropertySeq,
    property_name: &str,
    element: &XmlElement,
    tag_name: &'static str,
) -> Result<(), SecurityConfigError> {
    if let Some(tag) = element.first_child_element(tag_name) {
        let text = tag
            .text()
            .ok_or(SecurityConfigError::ImproperFormat { tag: tag_name })?;
        properties.upsert(Property::new(property_name, text));
    }
    Ok(())
}

// TODO: expose reliability and durability once the logging plugin accepts them
fn add_properties_from_qos_profile(properties: &mut PropertySeq, profile: &QosProfile) {
    properties.upsert(Property::new(
        logging::DISTRIBUTE_DEPTH_PROPERTY,
        profile.depth.to_string(),
    ));
}

#[cfg(all(test, feature = "security"))]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!(
            "<?xml version='1.0' encoding='UTF-8'?>\n<security_log version='1'>\n{}\n</security_log>\n",
            body
        )
    }

    #[test]
    fn test_missing_root_element() {
        let err = parse_logging_xml("<not_security_log/>").unwrap_err();
        assert!(matches!(err, SecurityConfigError::MissingSecurityLog));
        assert_eq!(err.to_string(), "logger xml file missing 'security_log'");
    }

    #[test]
    fn test_malformed_xml_reports_missing_root() {
        let err = parse_logging_xml("<security_log><file>x</security_log>").unwrap_err();
        assert!(matches!(err, SecurityConfigError::MissingSecurityLog));
    }

    #[test]
    fn test_empty_leaf_is_improper_format() {
        for tag in ["file", "verbosity", "distribute"] {
            let xml = wrap(&format!("<{0}></{0}>", tag));
            let err = parse_logging_xml(&xml).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("failed to set security logging {}: improper format", tag)
            );
        }
    }

    #[test]
    fn test_leaf_starting_with_comment_is_improper_format() {
        let err = parse_logging_xml(&wrap("<file><!-- c -->foo</file>")).unwrap_err();
        assert!(matches!(err, SecurityConfigError::ImproperFormat { tag: "file" }));
    }

    #[test]
    fn test_empty_profile_is_improper_format() {
        let err = parse_logging_xml(&wrap("<qos><profile/></qos>")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to set security logging profile: improper format"
        );
    }

    #[test]
    fn test_empty_depth_is_improper_format() {
        let err = parse_logging_xml(&wrap("<qos><depth> </depth></qos>")).unwrap_err();
        assert!(matches!(
            err,
            SecurityConfigError::ImproperFormat { tag: "depth" }
        ));
    }

    #[test]
    fn test_empty_qos_adds_nothing() {
        let properties = parse_logging_xml(&wrap("<qos></qos>")).unwrap();
        assert_eq!(properties.len(), 1);
    }

    #[test]
    fn test_profile_depth_then_plugin_order() {
        let properties = parse_logging_xml(&wrap("<qos><profile>SENSOR_DATA</profile></qos>")).unwrap();
        let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![logging::PLUGIN_PROPERTY, logging::DISTRIBUTE_DEPTH_PROPERTY]
        );
        assert_eq!(
            properties.value_of(logging::DISTRIBUTE_DEPTH_PROPERTY),
            Some("5")
        );
    }
}
