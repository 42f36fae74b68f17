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

use thiserror::Error;

/// Reasons a cleaned phone number could not be brought to `+<digits>` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("Nothing left after removing non-dialable characters")]
    Empty,
    /// `length` counts the plus sign when there is one.
    #[error("Number is too short to be valid ({length} characters)")]
    TooShort { length: usize },
    #[error("Number still contains characters other than digits and a leading plus sign")]
    NotCleaned,
}
