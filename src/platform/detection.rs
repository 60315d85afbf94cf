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

use super::Platform;
use super::constants::{DEBIAN_MARKER, REDHAT_MARKER};
use crate::error::{Result, ToolcheckError};
use std::path::{Path, PathBuf};

/// Classifies a filesystem root into a [`Platform`].
///
/// Markers are resolved relative to `root`, so tests can point the detector
/// at a temporary directory instead of `/`.
#[derive(Debug, Clone)]
pub struct PlatformDetector {
    root: PathBuf,
    windows_runtime: bool,
}

impl PlatformDetector {
    pub fn new(root: impl Into<PathBuf>, windows_runtime: bool) -> Self {
        Self {
            root: root.into(),
            windows_runtime,
        }
    }

    /// Detector for the machine this process runs on.
    pub fn host() -> Self {
        Self::new("/", cfg!(windows))
    }

    fn marker_path(&self, marker: &str) -> PathBuf {
        self.root.join(marker.trim_start_matches('/'))
    }

    /// Debian marker first, then Red Hat, then the Windows runtime.
    pub fn detect(&self) -> Result<Platform> {
        let debian = self.marker_path(DEBIAN_MARKER);
        if marker_present(&debian) {
            log::debug!("Found Debian marker at {}", debian.display());
            return Ok(Platform::Debian);
        }

        let redhat = self.marker_path(REDHAT_MARKER);
        if marker_present(&redhat) {
            log::debug!("Found Red Hat marker at {}", redhat.display());
            return Ok(Platform::RedHat);
        }

        if self.windows_runtime {
            log::debug!("Running under the Windows runtime");
            return Ok(Platform::Windows);
        }

        Err(ToolcheckError::UnsupportedPlatform {
            searched: vec![
                debian.display().to_string(),
                redhat.display().to_string(),
                "Windows runtime".to_string(),
            ],
        })
    }
}

fn marker_present(path: &Path) -> bool {
    path.is_file()
}

/// Detect the host platform. Call once and pass the result along.
pub fn detect_platform() -> Result<Platform> {
    let platform = PlatformDetector::host().detect()?;
    log::info!("Detected platform: {platform}");
    Ok(platform)
}
