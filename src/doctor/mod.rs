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

use crate::config::ToolcheckConfig;
use crate::error::{Result, ToolcheckError};
use crate::platform::Platform;
use crate::probe::{CheckItem, SystemProbe, evaluate};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub mod checks;
pub mod formatters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckCategory {
    SystemPackages,
    Compilers,
    BuildTools,
    Python,
    TestFrameworks,
    Cache,
    Git,
    Formatting,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::SystemPackages => write!(f, "System packages"),
            CheckCategory::Compilers => write!(f, "Compiler tools"),
            CheckCategory::BuildTools => write!(f, "Build tools"),
            CheckCategory::Python => write!(f, "Python tooling"),
            CheckCategory::TestFrameworks => write!(f, "Test frameworks"),
            CheckCategory::Cache => write!(f, "Compiler cache"),
            CheckCategory::Git => write!(f, "Git identity"),
            CheckCategory::Formatting => write!(f, "Formatting configuration"),
        }
    }
}

impl CheckCategory {
    /// Command-line spelling of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCategory::SystemPackages => "system-packages",
            CheckCategory::Compilers => "compilers",
            CheckCategory::BuildTools => "build-tools",
            CheckCategory::Python => "python",
            CheckCategory::TestFrameworks => "test-frameworks",
            CheckCategory::Cache => "cache",
            CheckCategory::Git => "git",
            CheckCategory::Formatting => "formatting",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        CheckCategory::all()
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    /// Every category in report order.
    pub fn all() -> Vec<CheckCategory> {
        vec![
            CheckCategory::SystemPackages,
            CheckCategory::Compilers,
            CheckCategory::BuildTools,
            CheckCategory::Python,
            CheckCategory::TestFrameworks,
            CheckCategory::Cache,
            CheckCategory::Git,
            CheckCategory::Formatting,
        ]
    }

    /// Build the group of items this category requires on `platform`.
    pub fn create_group(&self, platform: Platform, context: &CheckContext) -> CheckGroup {
        use crate::doctor::checks::{formatting, headers, identity, packages, python, toolchain};

        let items = match self {
            CheckCategory::SystemPackages => packages::items(platform),
            CheckCategory::Compilers => toolchain::compiler_items(platform),
            CheckCategory::BuildTools => toolchain::build_tool_items(platform),
            CheckCategory::Python => python::items(platform),
            CheckCategory::TestFrameworks => headers::items(platform, &context.extra_header_paths),
            CheckCategory::Cache => toolchain::cache_items(platform),
            CheckCategory::Git => identity::items(),
            CheckCategory::Formatting => formatting::items(&context.formatting_dir),
        };

        CheckGroup::new(*self, items)
    }
}

/// Parse a comma separated category list, keeping report order and dropping duplicates.
pub fn parse_categories(spec: &str) -> Result<Vec<CheckCategory>> {
    let mut categories = Vec::new();
    for part in spec.split(',').filter(|p| !p.trim().is_empty()) {
        let category = CheckCategory::parse(part)
            .ok_or_else(|| ToolcheckError::InvalidCategory(part.trim().to_string()))?;
        categories.push(category);
    }
    categories.sort();
    categories.dedup();
    Ok(categories)
}

/// Locations the file-based groups probe, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckContext {
    pub formatting_dir: PathBuf,
    pub extra_header_paths: Vec<PathBuf>,
}

impl CheckContext {
    pub fn from_config(config: &ToolcheckConfig) -> Result<Self> {
        Ok(Self {
            formatting_dir: config.formatting_dir()?,
            extra_header_paths: config.headers.extra_search_paths.clone(),
        })
    }
}

/// Named, ordered set of items that must all be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub category: CheckCategory,
    pub items: Vec<CheckItem>,
}

impl CheckGroup {
    pub fn new(category: CheckCategory, items: Vec<CheckItem>) -> Self {
        Self { category, items }
    }

    /// Probe every item in definition order.
    ///
    /// An item whose `requires` is already missing is not probed and not
    /// reported; the missing prerequisite already fails the group. A probe
    /// that faults is recorded on the result and the remaining items are
    /// still probed.
    pub fn run(&self, probe: &dyn SystemProbe) -> CheckResult {
        let mut missing: Vec<String> = Vec::new();
        let mut faults: Vec<String> = Vec::new();

        for item in &self.items {
            if let Some(required) = &item.requires {
                if missing.contains(required) {
                    log::debug!("Skipping {} because {required} is missing", item.name);
                    continue;
                }
            }

            match evaluate(item, probe) {
                Ok(true) => {}
                Ok(false) => missing.push(item.name.clone()),
                Err(e) => {
                    log::warn!("{}: {} could not be evaluated: {e}", self.category, item.name);
                    faults.push(e.to_string());
                }
            }
        }

        let result = CheckResult::new(self.category, self.items.len(), missing);
        if faults.is_empty() {
            result
        } else {
            result.with_fault(faults.join("; "))
        }
    }
}

/// Outcome of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub category: CheckCategory,
    pub satisfied: bool,
    pub total: usize,
    pub missing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl CheckResult {
    pub fn new(category: CheckCategory, total: usize, missing: Vec<String>) -> Self {
        Self {
            category,
            satisfied: missing.is_empty(),
            total,
            missing,
            fault: None,
        }
    }

    /// Record a probe fault. A faulted group is never satisfied.
    pub fn with_fault(mut self, fault: impl Into<String>) -> Self {
        self.satisfied = false;
        self.fault = Some(fault.into());
        self
    }

    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub platform: Platform,
    pub results: Vec<CheckResult>,
}

impl AuditReport {
    /// Logical AND over every group.
    pub fn satisfied(&self) -> bool {
        self.results.iter().all(|r| r.satisfied)
    }

    pub fn unsatisfied_count(&self) -> usize {
        self.results.iter().filter(|r| !r.satisfied).count()
    }

    pub fn result_for(&self, category: CheckCategory) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.category == category)
    }

    pub fn determine_exit_code(&self) -> i32 {
        if self.satisfied() { 0 } else { 1 }
    }
}

/// Runs groups against one probe and folds their results.
pub struct AuditEngine<'a> {
    platform: Platform,
    probe: &'a dyn SystemProbe,
}

impl<'a> AuditEngine<'a> {
    pub fn new(platform: Platform, probe: &'a dyn SystemProbe) -> Self {
        Self { platform, probe }
    }

    /// Run `groups` in the given order. A fault in one group is recorded on
    /// that group and the remaining groups still run.
    pub fn audit(&self, groups: &[CheckGroup]) -> AuditReport {
        let mut results = Vec::with_capacity(groups.len());

        for group in groups {
            let start = Instant::now();
            let result = group.run(self.probe);
            log::info!(
                "{} finished in {:?} ({} missing)",
                group.category,
                start.elapsed(),
                result.missing.len()
            );
            results.push(result);
        }

        AuditReport {
            platform: self.platform,
            results,
        }
    }
}
