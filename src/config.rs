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

use crate::error::{Result, ToolcheckError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "TOOLCHECK_HOME";
const HOME_DIR_NAME: &str = "toolcheck";
const FORMATTING_DIR_NAME: &str = "cpp-dev";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ToolcheckConfig {
    #[serde(default)]
    pub formatting: FormattingConfig,

    #[serde(default)]
    pub headers: HeaderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormattingConfig {
    /// Directory holding the per-user formatter configuration files.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HeaderConfig {
    /// Include directories probed after the built-in candidates.
    #[serde(default)]
    pub extra_search_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl ToolcheckConfig {
    pub fn load(toolcheck_home: &Path) -> Result<Self> {
        let config_path = toolcheck_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ToolcheckError::PermissionDenied(config_path.display().to_string())
            }
            _ => ToolcheckError::Io(e),
        })?;
        let config: ToolcheckConfig = toml::from_str(&contents).map_err(|e| {
            ToolcheckError::ConfigFile(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    /// Whether output going to a stream should be coloured.
    pub fn use_color(&self, is_terminal: bool) -> bool {
        is_terminal && self.output.color
    }

    /// Directory the formatting group probes for configuration files.
    pub fn formatting_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.formatting.directory {
            return Ok(dir.clone());
        }

        dirs::config_dir()
            .map(|dir| dir.join(FORMATTING_DIR_NAME))
            .ok_or_else(|| {
                ToolcheckError::ConfigError(
                    "Unable to determine the per-user configuration directory".to_string(),
                )
            })
    }
}

/// Resolve the directory holding `config.toml`.
pub fn toolcheck_home() -> Result<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV_VAR) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join(HOME_DIR_NAME))
        .ok_or_else(|| {
            ToolcheckError::ConfigError(format!(
                "Unable to determine config directory; set {HOME_ENV_VAR}"
            ))
        })
}

pub fn new_toolcheck_config() -> Result<ToolcheckConfig> {
    let home = toolcheck_home()?;
    ToolcheckConfig::load(&home)
}
