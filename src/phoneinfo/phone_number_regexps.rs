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

use regex::Regex;

use super::helper_constants::{NON_DIALABLE_CHARS, NORMALIZED_NUMBER};

pub(super) struct PhoneNumberRegExps {
    /// Every character that is neither an ASCII digit nor a plus sign.
    /// Replacing its matches with nothing is the first cleaning pass.
    pub non_dialable_chars_pattern: Regex,

    /// Full form of a normalized number: a plus sign followed by digits.
    /// Use with `full_match`.
    pub normalized_number_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            non_dialable_chars_pattern: Regex::new(NON_DIALABLE_CHARS)
                .expect("Invalid constant pattern!"),
            normalized_number_pattern: Regex::new(NORMALIZED_NUMBER)
                .expect("Invalid constant pattern!"),
        }
    }
}
