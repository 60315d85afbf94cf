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

//! Read-only presence probes.
//!
//! A [`CheckItem`] pairs a name with a [`ProbeKind`]; [`evaluate`] turns it
//! into a yes/no answer through a [`SystemProbe`]. Absence is always `false`,
//! never an error. Only faults that make the audit itself unreliable (for
//! example permission denied on a directory) surface as `Err`.

mod host;
mod process;

pub use host::HostProbe;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Capabilities the checks need from the host.
pub trait SystemProbe {
    /// True if `name` resolves on the search path. Never executes it.
    fn command_on_path(&self, name: &str) -> bool;

    /// True if the platform's package database lists `name` as installed.
    fn package_registered(&self, name: &str) -> bool;

    /// True if the Python interpreter's package index has `name`.
    fn python_package_installed(&self, name: &str) -> bool;

    fn file_exists(&self, path: &Path) -> Result<bool>;

    /// Value of a git configuration key, `None` when unset.
    fn config_value(&self, key: &str) -> Option<String>;
}

/// How a [`CheckItem`] is tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeKind {
    CommandOnPath,
    PackageRegistered,
    PythonPackage,
    /// Ordered candidates, most likely first. Any hit satisfies the item.
    FileExists { candidates: Vec<PathBuf> },
    ConfigValue,
}

impl ProbeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeKind::CommandOnPath => "command",
            ProbeKind::PackageRegistered => "package",
            ProbeKind::PythonPackage => "python package",
            ProbeKind::FileExists { .. } => "file",
            ProbeKind::ConfigValue => "config value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub name: String,
    pub kind: ProbeKind,
    /// Item that must be present before this one is probed.
    pub requires: Option<String>,
}

impl CheckItem {
    pub fn new(name: impl Into<String>, kind: ProbeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            requires: None,
        }
    }

    pub fn command(name: impl Into<String>) -> Self {
        Self::new(name, ProbeKind::CommandOnPath)
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self::new(name, ProbeKind::PackageRegistered)
    }

    pub fn python_package(name: impl Into<String>) -> Self {
        Self::new(name, ProbeKind::PythonPackage)
    }

    pub fn file(name: impl Into<String>, candidates: Vec<PathBuf>) -> Self {
        Self::new(name, ProbeKind::FileExists { candidates })
    }

    pub fn config_value(key: impl Into<String>) -> Self {
        Self::new(key, ProbeKind::ConfigValue)
    }

    pub fn requires(mut self, item: impl Into<String>) -> Self {
        self.requires = Some(item.into());
        self
    }
}

/// Run the probe for `item`.
pub fn evaluate(item: &CheckItem, probe: &dyn SystemProbe) -> Result<bool> {
    let found = match &item.kind {
        ProbeKind::CommandOnPath => probe.command_on_path(&item.name),
        ProbeKind::PackageRegistered => probe.package_registered(&item.name),
        ProbeKind::PythonPackage => probe.python_package_installed(&item.name),
        ProbeKind::FileExists { candidates } => first_existing(candidates, probe)?.is_some(),
        ProbeKind::ConfigValue => probe
            .config_value(&item.name)
            .is_some_and(|value| !value.trim().is_empty()),
    };

    log::debug!(
        "{} '{}': {}",
        item.kind.label(),
        item.name,
        if found { "found" } else { "missing" }
    );
    Ok(found)
}

/// First candidate that exists, stopping at the first hit.
pub fn first_existing<'a>(
    candidates: &'a [PathBuf],
    probe: &dyn SystemProbe,
) -> Result<Option<&'a PathBuf>> {
    for candidate in candidates {
        if probe.file_exists(candidate)? {
            log::trace!("Matched {}", candidate.display());
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
