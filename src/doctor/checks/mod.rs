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

//! Static per-platform catalog behind each [`CheckCategory`](crate::doctor::CheckCategory).

pub mod formatting;
pub mod headers;
pub mod identity;
pub mod packages;
pub mod python;
pub mod toolchain;

use crate::probe::CheckItem;

pub(crate) fn commands(names: &[&str]) -> Vec<CheckItem> {
    names.iter().map(|name| CheckItem::command(*name)).collect()
}
