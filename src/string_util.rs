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

/// Returns the first `n` bytes of an ASCII string, or `None` if it is
/// shorter than that.
pub fn ascii_head(s: &str, n: usize) -> Option<&str> {
    s.get(..n)
}

/// Returns the last `n` bytes of an ASCII string, or `None` if it is
/// shorter than that.
pub fn ascii_tail(s: &str, n: usize) -> Option<&str> {
    let start = s.len().checked_sub(n)?;
    s.get(start..)
}

#[cfg(test)]
mod tests {
    use crate::string_util::{ascii_head, ascii_tail};

    #[test]
    fn test_usage() {
        assert_eq!(ascii_head("11999998888", 2), Some("11"));
        assert_eq!(ascii_tail("11999998888", 9), Some("999998888"));
        assert_eq!(ascii_tail("11999998888", 11), Some("11999998888"));

        assert_eq!(ascii_head("1", 2), None);
        assert_eq!(ascii_tail("12345678", 9), None);
    }
}
