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

const DEBIAN_PACKAGES: &[&str] = &[
    "build-essential",
    "gcc",
    "g++",
    "clang",
    "libssl-dev",
    "libffi-dev",
    "git",
    "curl",
    "wget",
    "jq",
];

const REDHAT_PACKAGES: &[&str] = &[
    "gcc",
    "gcc-c++",
    "make",
    "clang",
    "openssl-devel",
    "libffi-devel",
    "git",
    "curl",
    "wget",
    "jq",
];

const WINDOWS_PACKAGES: &[&str] = &["git", "cmake", "ninja", "llvm", "python"];

/// System packages registered with the platform's package database.
///
/// On Windows the package manager itself is the first requirement; its
/// packages are only queried once `choco` resolves.
pub fn items(platform: Platform) -> Vec<CheckItem> {
    match platform {
        Platform::Debian => packages(DEBIAN_PACKAGES),
        Platform::RedHat => packages(REDHAT_PACKAGES),
        Platform::Windows => {
            let manager = platform.package_manager().program();
            let mut items = vec![CheckItem::command(manager)];
            items.extend(
                WINDOWS_PACKAGES
                    .iter()
                    .map(|name| CheckItem::package(*name).requires(manager)),
            );
            items
        }
    }
}

fn packages(names: &[&str]) -> Vec<CheckItem> {
    names.iter().map(|name| CheckItem::package(*name)).collect()
}
