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

use std::borrow::Cow;

use regex::Regex;

pub trait RegexFullMatch {
    /// Whether the leftmost match spans the whole input.
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexStrip {
    /// Removes every match from `s`. Borrows when nothing matched.
    fn strip_all<'a>(&self, s: &'a str) -> Cow<'a, str>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

impl RegexStrip for Regex {
    fn strip_all<'a>(&self, s: &'a str) -> Cow<'a, str> {
        self.replace_all(s, "")
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use regex::Regex;

    use super::{RegexFullMatch, RegexStrip};

    #[test]
    fn test_full_match() {
        let regex = Regex::new(r"\+[0-9]+").unwrap();
        assert!(regex.full_match("+5511"));
        assert!(!regex.full_match("+55 11"));
        assert!(!regex.full_match("x+5511"));
        assert!(!regex.full_match(""));
    }

    #[test]
    fn test_strip_all() {
        let regex = Regex::new(r"[^0-9]").unwrap();
        assert_eq!(regex.strip_all("(11) 9999-0000"), "1199990000");
        assert!(matches!(regex.strip_all("123"), Cow::Borrowed("123")));
    }
}
