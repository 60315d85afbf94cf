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

pub const GIT_IDENTITY_KEYS: &[&str] = &["user.name", "user.email"];

/// git on PATH plus both identity fields. The fields are only read when git resolves.
pub fn items() -> Vec<CheckItem> {
    let mut items = vec![CheckItem::command("git")];
    items.extend(
        GIT_IDENTITY_KEYS
            .iter()
            .map(|key| CheckItem::config_value(*key).requires("git")),
    );
    items
}
