// Copyright (C) 2025 The PhoneOsint Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

/// Brazilian mobile carriers that can be guessed from a number.
///
/// The guess comes from the historical owner of the numbering block and
/// says nothing about portability, so a number may well belong to another
/// carrier today.
#[derive(Debug, EnumIter, AsRefStr, Display, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    /// **Vivo** (Telefônica Brasil).
    Vivo,
    /// **Claro** (América Móvil).
    Claro,
    /// **TIM** (Telecom Italia Mobile).
    #[strum(serialize = "TIM")]
    #[serde(rename = "TIM")]
    Tim,
    /// **Oi**.
    Oi,
    /// **No match.**
    /// The prefix is not part of any known block.
    #[strum(serialize = "Não identificada")]
    #[serde(rename = "Não identificada")]
    NotIdentified,
}

impl Carrier {
    /// Returns `true` for every variant that names an actual carrier.
    pub fn is_identified(&self) -> bool {
        !matches!(self, Carrier::NotIdentified)
    }
}
