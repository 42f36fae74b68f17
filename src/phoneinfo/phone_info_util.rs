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

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::{
    enums::Carrier,
    errors::NormalizationError,
    helper_constants::{
        AREA_CODES, AREA_CODE_LENGTH, BRAZIL, BRAZIL_PREFIX, CARRIER_PREFIXES,
        CARRIER_PREFIX_LENGTH, CARRIER_TAIL_LENGTH, COUNTRY_PREFIXES, UNKNOWN_AREA,
    },
    helper_functions::{format_location, keep_leading_plus_only, normalize_cleaned},
    helper_types::{DomesticInfo, NormalizedNumber, PhoneInfo},
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::{
    regex_util::{RegexFullMatch, RegexStrip},
    string_util::{ascii_head, ascii_tail},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, NormalizationError>;

pub struct PhoneInfoUtil {
    /// Helper struct holding the compiled cleaning and validation patterns.
    reg_exps: PhoneNumberRegExps,

    /// Dialing prefix (with the plus sign) to country label, sorted by
    /// prefix length in descending order so that the first hit is the
    /// longest matching prefix.
    country_prefixes: Vec<(&'static str, &'static str)>,

    /// Brazilian DDD to "City/UF".
    area_codes: HashMap<&'static str, &'static str>,

    /// Carrier prefix blocks, in the order they are checked.
    carrier_prefixes: Vec<(Carrier, HashSet<&'static str>)>,
}

impl PhoneInfoUtil {
    pub(super) fn new() -> Self {
        let mut country_prefixes = COUNTRY_PREFIXES.to_vec();
        // Stable, so entries of equal length keep their table order.
        country_prefixes.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

        let carrier_prefixes: Vec<(Carrier, HashSet<&'static str>)> = CARRIER_PREFIXES
            .iter()
            .map(|(carrier, prefixes)| (*carrier, prefixes.iter().copied().collect()))
            .collect();

        Self {
            reg_exps: PhoneNumberRegExps::new(),
            country_prefixes,
            area_codes: AREA_CODES.iter().copied().collect(),
            carrier_prefixes,
        }
    }

    /// Dialing prefixes and country labels in lookup order, longest prefix
    /// first.
    pub fn get_supported_countries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.country_prefixes.iter().copied()
    }

    /// Strips every character that is not an ASCII digit, keeping a single
    /// plus sign when one comes before the digits.
    ///
    /// Never fails: `None` and empty input give an empty string.
    pub fn clean(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };
        let digits_and_plus = self.reg_exps.non_dialable_chars_pattern.strip_all(raw);
        keep_leading_plus_only(&digits_and_plus)
    }

    /// Turns a cleaned number into its canonical `+<digits>` form, guessing
    /// the Brazilian country code when the length suggests a local number.
    ///
    /// Input that still holds characters other than digits and a leading
    /// plus is refused with [`NormalizationError::NotCleaned`].
    pub fn normalize(&self, cleaned: &str) -> Result<NormalizedNumber> {
        let normalized = normalize_cleaned(cleaned)?;
        if !self.reg_exps.normalized_number_pattern.full_match(&normalized) {
            return Err(NormalizationError::NotCleaned);
        }
        trace!("Normalized '{}' to '{}'", cleaned, normalized);
        Ok(NormalizedNumber::new_unchecked(normalized))
    }

    /// Cleans and normalizes raw user input in one go.
    pub fn parse(&self, raw: &str) -> Result<NormalizedNumber> {
        self.normalize(&self.clean(Some(raw)))
    }

    /// Returns the country whose dialing prefix is the longest one the
    /// number starts with, if any.
    pub fn get_country_for_number(&self, number: &NormalizedNumber) -> Option<&'static str> {
        self.country_prefixes
            .iter()
            .find(|(prefix, _)| number.as_str().starts_with(*prefix))
            .map(|(_, country)| *country)
    }

    /// Returns "City/UF" for a DDD, or `Desconhecida` when the code is not
    /// in use.
    pub fn get_area_name(&self, area_code: &str) -> &'static str {
        self.area_codes
            .get(area_code)
            .copied()
            .unwrap_or(UNKNOWN_AREA)
    }

    /// Looks the two digit prefix up in the carrier blocks.
    pub fn get_carrier_for_prefix(&self, prefix: &str) -> Carrier {
        self.carrier_prefixes
            .iter()
            .find(|(_, prefixes)| prefixes.contains(prefix))
            .map(|(carrier, _)| *carrier)
            .unwrap_or(Carrier::NotIdentified)
    }

    /// Reads DDD and carrier out of a Brazilian number.
    ///
    /// The number is expected to start with `+55`; when it does not, the
    /// whole string after the plus is taken as the national number. Missing
    /// table entries give sentinel values, never errors.
    pub fn get_domestic_info(&self, number: &NormalizedNumber) -> DomesticInfo {
        let national_number = number
            .as_str()
            .strip_prefix(BRAZIL_PREFIX)
            .unwrap_or_else(|| &number.as_str()[1..]);

        let location = ascii_head(national_number, AREA_CODE_LENGTH)
            .map(|ddd| format_location(ddd, self.get_area_name(ddd)));

        let carrier = ascii_tail(national_number, CARRIER_TAIL_LENGTH)
            .and_then(|tail| ascii_head(tail, CARRIER_PREFIX_LENGTH))
            .map(|prefix| self.get_carrier_for_prefix(prefix));

        DomesticInfo { location, carrier }
    }

    /// Runs the whole pipeline over raw input: clean, normalize, resolve the
    /// country and, for Brazil, the DDD region and carrier.
    pub fn get_phone_info(&self, raw: &str) -> PhoneInfo {
        let number = match self.parse(raw) {
            Ok(number) => number,
            Err(err) => {
                debug!("Rejected phone number '{}': {}", raw, err);
                return PhoneInfo::invalid(raw);
            }
        };

        let country = self.get_country_for_number(&number);
        let domestic = if country == Some(BRAZIL) {
            self.get_domestic_info(&number)
        } else {
            DomesticInfo { location: None, carrier: None }
        };
        trace!(
            "Classified '{}': country={:?}, location={:?}, carrier={:?}",
            number, country, domestic.location, domestic.carrier
        );

        let number = number.into_string();
        PhoneInfo {
            original_number: raw.to_owned(),
            formatted: Some(number.clone()),
            number: Some(number),
            is_valid: true,
            country,
            carrier: domestic.carrier,
            location: domestic.location,
        }
    }
}
