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

mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod helper_types;
pub mod phone_info_util;
mod phone_number_regexps;

use std::sync::LazyLock;

pub use enums::Carrier;
pub use errors::NormalizationError;
pub use helper_types::{DomesticInfo, NormalizedNumber, PhoneInfo};
use crate::phoneinfo::phone_info_util::PhoneInfoUtil;

pub static PHONE_INFO_UTIL: LazyLock<PhoneInfoUtil> = LazyLock::new(|| {
    PhoneInfoUtil::new()
});
