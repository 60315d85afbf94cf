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

use crate::probe::CheckItem;
use std::path::Path;

pub const FORMATTING_FILES: &[&str] = &[".clang-format", ".clang-tidy", ".cmake-format.yaml"];

// A missing directory and an empty one both report every file missing.
pub fn items(dir: &Path) -> Vec<CheckItem> {
    FORMATTING_FILES
        .iter()
        .map(|file| CheckItem::file(*file, vec![dir.join(file)]))
        .collect()
}
