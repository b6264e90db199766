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

//! Domain models for security property derivation.
//!
//! Pure data structures: properties, the property sequence handed to the
//! transport, the security options of a participant and the set of files
//! discovered under its security root. Free of I/O side effects.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single name/value entry consumed by the security plugins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered property list.
///
/// `upsert` keeps names unique: an existing entry is overwritten in place,
/// otherwise the property is appended. `push` appends unconditionally and is
/// reserved for sequences whose names are known to be distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySeq(Vec<Property>);

impl PropertySeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: Property) {
        self.0.push(property);
    }

    /// Insert, or overwrite the value of the entry with the same name.
    pub fn upsert(&mut self, property: Property) {
        match self.0.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.0.push(property),
        }
    }

    /// Upsert every property of `other`, preserving its order.
    pub fn merge_from(&mut self, other: PropertySeq) {
        for property in other {
            self.upsert(property);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.0
    }
}

impl IntoIterator for PropertySeq {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertySeq {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Property> for PropertySeq {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut seq = PropertySeq::new();
        for property in iter {
            seq.upsert(property);
        }
        seq
    }
}

/// Caller-owned property policy handed to the transport's security plugins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPolicy {
    pub properties: PropertySeq,
}

impl PropertyPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &PropertySeq {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertySeq {
        &mut self.properties
    }
}

/// Security settings of one participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityOptions {
    /// Directory holding the credential, policy and logging files
    pub security_root_path: Option<PathBuf>,
    /// Fail instead of silently disabling security when files are missing
    pub enforce_security: bool,
}

impl SecurityOptions {
    pub fn new(security_root_path: impl Into<PathBuf>, enforce_security: bool) -> Self {
        Self {
            security_root_path: Some(security_root_path.into()),
            enforce_security,
        }
    }
}

/// Absolute paths of the files found under a security root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFiles {
    pub identity_ca_cert_path: PathBuf,
    pub permissions_ca_cert_path: PathBuf,
    pub governance_path: PathBuf,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub permissions_path: PathBuf,
    pub logging_path: Option<PathBuf>,
}
