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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary `TOOLCHECK_HOME` plus a formatting directory inside it.
/// Both are removed when the guard is dropped.
pub struct TestHomeGuard {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn formatting_dir(&self) -> PathBuf {
        self.path().join("cpp-dev")
    }

    /// Point the formatting group at `formatting_dir()`.
    pub fn write_config(&self) -> &Self {
        let config = format!(
            "[formatting]\ndirectory = '{}'\n",
            self.formatting_dir().display()
        );
        fs::write(self.path().join("config.toml"), config).expect("Failed to write config.toml");
        self
    }

    pub fn write_raw_config(&self, contents: &str) -> &Self {
        fs::write(self.path().join("config.toml"), contents)
            .expect("Failed to write config.toml");
        self
    }

    pub fn setup_formatting_files(&self) -> &Self {
        let dir = self.formatting_dir();
        fs::create_dir_all(&dir).expect("Failed to create formatting directory");
        for file in [".clang-format", ".clang-tidy", ".cmake-format.yaml"] {
            fs::write(dir.join(file), "").expect("Failed to write formatting file");
        }
        self
    }
}

/// Whether the host this suite runs on is one toolcheck can classify.
#[allow(dead_code)]
pub fn host_is_supported() -> bool {
    cfg!(windows)
        || Path::new("/etc/debian_version").is_file()
        || Path::new("/etc/redhat-release").is_file()
}
