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

use super::SystemProbe;
use super::process::run_query;
use crate::error::{Result, ToolcheckError};
use crate::platform::{PackageManager, Platform};
use std::path::Path;
use which::which;

/// [`SystemProbe`] backed by the real machine, bound to one platform.
#[derive(Debug, Clone)]
pub struct HostProbe {
    platform: Platform,
    package_manager: PackageManager,
}

impl HostProbe {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            package_manager: platform.package_manager(),
        }
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
}

impl SystemProbe for HostProbe {
    fn command_on_path(&self, name: &str) -> bool {
        match which(name) {
            Ok(path) => {
                log::trace!("{name} resolved to {}", path.display());
                true
            }
            Err(_) => false,
        }
    }

    fn package_registered(&self, name: &str) -> bool {
        let manager = self.package_manager;
        match run_query(manager.program(), &manager.query_args(name)) {
            Some(output) => manager.is_installed(name, output.success, &output.stdout),
            None => false,
        }
    }

    fn python_package_installed(&self, name: &str) -> bool {
        run_query(
            self.platform.python_interpreter(),
            &["-m", "pip", "show", "--quiet", name],
        )
        .is_some_and(|output| output.success)
    }

    fn file_exists(&self, path: &Path) -> Result<bool> {
        path.try_exists()
            .map_err(|e| ToolcheckError::from_probe_io(&path.display().to_string(), e))
    }

    fn config_value(&self, key: &str) -> Option<String> {
        let output = run_query("git", &["config", "--get", key])?;
        if !output.success {
            return None;
        }

        let value = output.stdout.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
