// Copyright 2025 dentsusoken
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

//! Operating system family detection.
//!
//! The host is classified once at startup into a [`Platform`]; every later
//! component receives that value instead of looking at the host again. The
//! platform also decides which [`PackageManager`] backs package queries.

mod constants;
mod detection;
mod package_manager;

pub use constants::{DEBIAN_MARKER, REDHAT_MARKER};
pub use detection::{PlatformDetector, detect_platform};
pub use package_manager::PackageManager;

use serde::Serialize;
use std::fmt;

/// Operating system family the audit runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Debian,
    RedHat,
    Windows,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Debian => write!(f, "Debian-family"),
            Platform::RedHat => write!(f, "Red Hat-family"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}

impl Platform {
    pub fn package_manager(self) -> PackageManager {
        PackageManager::for_platform(self)
    }

    /// Python interpreter used for package-index queries.
    pub fn python_interpreter(self) -> &'static str {
        match self {
            Platform::Windows => constants::WINDOWS_PYTHON,
            Platform::Debian | Platform::RedHat => constants::UNIX_PYTHON,
        }
    }

    pub fn pip_command(self) -> &'static str {
        match self {
            Platform::Windows => constants::WINDOWS_PIP,
            Platform::Debian | Platform::RedHat => constants::UNIX_PIP,
        }
    }
}
