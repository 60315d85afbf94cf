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
use std::fmt;

/// Package database queried for one [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Dpkg,
    Rpm,
    Chocolatey,
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl PackageManager {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Debian => PackageManager::Dpkg,
            Platform::RedHat => PackageManager::Rpm,
            Platform::Windows => PackageManager::Chocolatey,
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Dpkg => "dpkg-query",
            PackageManager::Rpm => "rpm",
            PackageManager::Chocolatey => "choco",
        }
    }

    /// Read-only query arguments for `package`.
    ///
    /// Chocolatey v2 lists only local packages, so no source flag is passed.
    pub fn query_args(&self, package: &str) -> Vec<String> {
        match self {
            PackageManager::Dpkg => vec![
                "-W".to_string(),
                "--showformat=${Status}\n".to_string(),
                package.to_string(),
            ],
            PackageManager::Rpm => vec!["-q".to_string(), package.to_string()],
            PackageManager::Chocolatey => vec![
                "list".to_string(),
                "--exact".to_string(),
                "--limit-output".to_string(),
                package.to_string(),
            ],
        }
    }

    /// Decide from the query's exit status and stdout whether `package` is installed.
    pub fn is_installed(&self, package: &str, success: bool, stdout: &str) -> bool {
        if !success {
            return false;
        }

        match self {
            // dpkg keeps removed-but-not-purged packages with status "deinstall ok config-files".
            // Multi-arch packages print one status line per architecture.
            PackageManager::Dpkg => stdout
                .lines()
                .any(|line| line.trim() == "install ok installed"),
            PackageManager::Rpm => true,
            PackageManager::Chocolatey => {
                let prefix = format!("{}|", package.to_lowercase());
                stdout
                    .lines()
                    .any(|line| line.trim().to_lowercase().starts_with(&prefix))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_per_platform() {
        assert_eq!(
            PackageManager::for_platform(Platform::Debian),
            PackageManager::Dpkg
        );
        assert_eq!(
            PackageManager::for_platform(Platform::RedHat),
            PackageManager::Rpm
        );
        assert_eq!(
            PackageManager::for_platform(Platform::Windows),
            PackageManager::Chocolatey
        );
    }

    #[test]
    fn test_query_commands() {
        assert_eq!(PackageManager::Dpkg.program(), "dpkg-query");
        assert_eq!(
            PackageManager::Dpkg.query_args("libssl-dev"),
            vec!["-W", "--showformat=${Status}\n", "libssl-dev"]
        );
        assert_eq!(PackageManager::Rpm.query_args("gcc-c++"), vec!["-q", "gcc-c++"]);
        assert_eq!(PackageManager::Chocolatey.program(), "choco");
        assert_eq!(
            PackageManager::Chocolatey.query_args("ninja"),
            vec!["list", "--exact", "--limit-output", "ninja"]
        );
    }

    #[test]
    fn test_dpkg_status_interpretation() {
        let dpkg = PackageManager::Dpkg;
        assert!(dpkg.is_installed("gcc", true, "install ok installed"));
        assert!(!dpkg.is_installed("gcc", true, "deinstall ok config-files"));
        assert!(!dpkg.is_installed("gcc", false, ""));
        assert!(!dpkg.is_installed("gcc", true, "=install ok installed"));
        assert!(dpkg.is_installed("gcc", true, "install ok installed\n"));
        assert!(dpkg.is_installed(
            "libc6",
            true,
            "deinstall ok config-files\ninstall ok installed\n"
        ));
    }

    #[test]
    fn test_rpm_uses_exit_status() {
        assert!(PackageManager::Rpm.is_installed("git", true, "git-2.43.0-1.fc39.x86_64"));
        assert!(!PackageManager::Rpm.is_installed("git", false, "package git is not installed"));
    }

    #[test]
    fn test_chocolatey_output_interpretation() {
        let choco = PackageManager::Chocolatey;
        assert!(choco.is_installed("cmake", true, "cmake|3.29.2\n"));
        assert!(choco.is_installed("LLVM", true, "llvm|18.1.5\n"));
        assert!(!choco.is_installed("cmake", true, "cmake.install|3.29.2\n"));
        assert!(!choco.is_installed("cmake", true, ""));
    }
}
