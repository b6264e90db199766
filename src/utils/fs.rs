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

//! Filesystem helpers for security file discovery.

use crate::engine_core::constants::FILE_URI_PREFIX;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Join `file_name` onto `root` and return the absolute path if it names a
/// readable regular file.
pub fn security_file_path(root: &Path, file_name: &str) -> Option<PathBuf> {
    let joined = root.join(file_name);
    let path = std::path::absolute(&joined).unwrap_or(joined);

    if is_readable(&path) {
        Some(path)
    } else {
        trace!(path = %path.display(), "security file not readable");
        None
    }
}

pub fn is_readable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => File::open(path).is_ok(),
        _ => false,
    }
}

pub fn path_to_uri(path: &Path) -> String {
    format!("{}{}", FILE_URI_PREFIX, path.display())
}
