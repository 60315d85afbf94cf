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

use crate::platform::Platform;
use crate::probe::CheckItem;

/// Add-on packages the project's hooks and build scripts import.
pub const REQUIRED_PACKAGES: &[&str] = &["pre-commit", "cmakelang", "clang-format", "gcovr"];

/// Interpreter, installer, then each required package.
///
/// Package queries go through the interpreter, so they are skipped when the
/// interpreter itself is missing.
pub fn items(platform: Platform) -> Vec<CheckItem> {
    let interpreter = platform.python_interpreter();
    let mut items = vec![
        CheckItem::command(interpreter),
        CheckItem::command(platform.pip_command()),
    ];
    items.extend(
        REQUIRED_PACKAGES
            .iter()
            .map(|name| CheckItem::python_package(*name).requires(interpreter)),
    );
    items
}
