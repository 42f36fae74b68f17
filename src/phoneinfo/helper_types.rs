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

use std::fmt;

use serde::Serialize;

use super::enums::Carrier;

/// A phone number in `+<country code><national number>` form.
///
/// Only the normalizer builds values of this type, so holding one means the
/// string starts with `+` and continues with ASCII digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    pub(super) fn new_unchecked(number: String) -> Self {
        Self(number)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the Brazilian numbering plan tells about a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomesticInfo {
    /// `DDD <code> - <City/UF>`, absent when the national number has fewer
    /// than two digits.
    pub location: Option<String>,
    /// Absent when the national number is too short to slice a carrier
    /// prefix out of it.
    pub carrier: Option<Carrier>,
}

/// Classification of a single input. Field names are part of the public
/// JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneInfo {
    #[serde(rename = "numero_original")]
    pub original_number: String,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "valido")]
    pub is_valid: bool,
    #[serde(rename = "pais")]
    pub country: Option<&'static str>,
    #[serde(rename = "operadora")]
    pub carrier: Option<Carrier>,
    #[serde(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "formatado")]
    pub formatted: Option<String>,
}

impl PhoneInfo {
    /// Result for an input that could not be normalized: only the original
    /// input is set.
    pub fn invalid(original_number: impl Into<String>) -> Self {
        Self {
            original_number: original_number.into(),
            number: None,
            is_valid: false,
            country: None,
            carrier: None,
            location: None,
            formatted: None,
        }
    }
}
