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

//! Named QoS presets.
//!
//! A closed table from profile name to QoS bundle. Lookup is exact and
//! case sensitive; callers must treat a miss as a configuration error.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoryPolicy {
    SystemDefault,
    KeepLast,
    KeepAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReliabilityPolicy {
    SystemDefault,
    Reliable,
    BestEffort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DurabilityPolicy {
    SystemDefault,
    TransientLocal,
    Volatile,
}

/// Depth value meaning "let the transport decide"
pub const DEPTH_SYSTEM_DEFAULT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QosProfile {
    pub history: HistoryPolicy,
    pub depth: usize,
    pub reliability: ReliabilityPolicy,
    pub durability: DurabilityPolicy,
}

impl QosProfile {
    const fn keep_last(depth: usize, reliability: ReliabilityPolicy) -> Self {
        Self {
            history: HistoryPolicy::KeepLast,
            depth,
            reliability,
            durability: DurabilityPolicy::Volatile,
        }
    }

    pub const SENSOR_DATA: QosProfile = QosProfile::keep_last(5, ReliabilityPolicy::BestEffort);
    pub const PARAMETERS: QosProfile = QosProfile::keep_last(1000, ReliabilityPolicy::Reliable);
    pub const DEFAULT: QosProfile = QosProfile::keep_last(10, ReliabilityPolicy::Reliable);
    pub const SERVICES_DEFAULT: QosProfile =
        QosProfile::keep_last(10, ReliabilityPolicy::Reliable);
    pub const PARAMETER_EVENTS: QosProfile =
        QosProfile::keep_last(1000, ReliabilityPolicy::Reliable);
    pub const SYSTEM_DEFAULT: QosProfile = QosProfile {
        history: HistoryPolicy::SystemDefault,
        depth: DEPTH_SYSTEM_DEFAULT,
        reliability: ReliabilityPolicy::SystemDefault,
        durability: DurabilityPolicy::SystemDefault,
    };
}

static SUPPORTED_PROFILES: [(&str, QosProfile); 6] = [
    ("SENSOR_DATA", QosProfile::SENSOR_DATA),
    ("PARAMETERS", QosProfile::PARAMETERS),
    ("DEFAULT", QosProfile::DEFAULT),
    ("SERVICES_DEFAULT", QosProfile::SERVICES_DEFAULT),
    ("PARAMETER_EVENTS", QosProfile::PARAMETER_EVENTS),
    ("SYSTEM_DEFAULT", QosProfile::SYSTEM_DEFAULT),
];

/// Look up a profile by its exact name.
pub fn resolve(name: &str) -> Option<&'static QosProfile> {
    SUPPORTED_PROFILES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, profile)| profile)
}

pub fn supported_profile_names() -> impl Iterator<Item = &'static str> {
    SUPPORTED_PROFILES.iter().map(|(name, _)| *name)
}
