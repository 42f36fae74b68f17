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

use super::{
    errors::NormalizationError,
    helper_constants::{
        BRAZIL_COUNTRY_CODE, BRAZIL_LANDLINE_LENGTH, BRAZIL_MOBILE_LENGTH, BRAZIL_PREFIX,
        MIN_LENGTH_FOR_INTERNATIONAL, MIN_LENGTH_WITH_BRAZIL_CODE, MIN_LENGTH_WITH_PLUS,
        PLUS_CHAR, PLUS_SIGN,
    },
};

/// Second cleaning pass over a string made of digits and plus signs only.
///
/// Plus signs in front of the first digit collapse into a single leading
/// plus, any other plus sign is dropped.
pub(super) fn keep_leading_plus_only(digits_and_plus: &str) -> String {
    let first_digit = digits_and_plus
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(digits_and_plus.len());

    let mut cleaned = String::with_capacity(digits_and_plus.len() - first_digit + 1);
    if first_digit > 0 {
        cleaned.push(PLUS_CHAR);
    }
    cleaned.extend(
        digits_and_plus[first_digit..]
            .chars()
            .filter(|c| c.is_ascii_digit()),
    );
    cleaned
}

/// Brings a cleaned number to `+<country code><national number>` form.
///
/// The rules are tried in order and the first one that applies wins:
/// 1. already has a plus sign: kept as is when longer than 8 characters;
/// 2. starts with `55` and has at least 12 digits: the Brazilian country
///    code is already there, only the plus is missing;
/// 3. 11 digits not starting with 0: Brazilian mobile with DDD;
/// 4. 10 digits not starting with 0: Brazilian landline with DDD;
/// 5. at least 10 digits: international number with its own country code;
/// 6. anything else is too short.
pub(super) fn normalize_cleaned(cleaned: &str) -> Result<String, NormalizationError> {
    if cleaned.is_empty() {
        return Err(NormalizationError::Empty);
    }
    let length = cleaned.len();

    if cleaned.starts_with(PLUS_CHAR) {
        return if length >= MIN_LENGTH_WITH_PLUS {
            Ok(cleaned.to_owned())
        } else {
            Err(NormalizationError::TooShort { length })
        };
    }

    if cleaned.starts_with(BRAZIL_COUNTRY_CODE) && length >= MIN_LENGTH_WITH_BRAZIL_CODE {
        return Ok(fast_cat::concat_str!(PLUS_SIGN, cleaned));
    }

    let has_area_code = matches!(cleaned.as_bytes()[0], b'1'..=b'9');
    if has_area_code && (length == BRAZIL_MOBILE_LENGTH || length == BRAZIL_LANDLINE_LENGTH) {
        return Ok(fast_cat::concat_str!(BRAZIL_PREFIX, cleaned));
    }

    if length >= MIN_LENGTH_FOR_INTERNATIONAL {
        return Ok(fast_cat::concat_str!(PLUS_SIGN, cleaned));
    }

    Err(NormalizationError::TooShort { length })
}

/// Formats the location label of a DDD.
pub(super) fn format_location(area_code: &str, area_name: &str) -> String {
    fast_cat::concat_str!("DDD ", area_code, " - ", area_name)
}
