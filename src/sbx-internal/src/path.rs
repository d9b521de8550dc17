// Copyright 2025 Searchbase Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Construction of request paths.
//!
//! Request paths interleave fixed segments, such as `_ccr` or `policy`, with
//! caller-provided values. Values are percent encoded so that arbitrary names
//! cannot break out of their path position. Two characters are deliberately
//! left unencoded: `,` because a single segment can address several targets,
//! and `*` because the service interprets wildcard expressions server-side.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sbx::target::Target;

/// The characters that are percent encoded in a path segment.
///
/// Everything except unreserved characters, `,`, and `*`. In particular `/`
/// is encoded, so a value never introduces new path segments.
const SEGMENT: AsciiSet = NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b',')
    .remove(b'*');

/// A request path under construction.
///
/// ```
/// # use searchbase_sbx_internal::path::Path;
/// # use sbx::target::Target;
/// let path = Path::new()
///     .value(&Target::from(["logs-1", "logs-2"]))
///     .fixed("_graph")
///     .fixed("explore")
///     .finish();
/// assert_eq!(path, "/logs-1,logs-2/_graph/explore");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fixed segment.
    pub fn fixed(mut self, segment: &str) -> Self {
        self.segments.push(enc(segment));
        self
    }

    /// Appends a caller-provided value as a single segment.
    ///
    /// Empty targets are skipped entirely, the surrounding segments close
    /// ranks. This is how optional path arguments disappear from the path.
    pub fn value(mut self, target: &Target) -> Self {
        if target.is_empty() {
            return self;
        }
        self.segments.push(enc(&target.joined()));
        self
    }

    /// Renders the path, always absolute.
    pub fn finish(self) -> String {
        let mut path = String::from("/");
        path.push_str(&self.segments.join("/"));
        path
    }
}

fn enc(value: &str) -> String {
    utf8_percent_encode(value, &SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn skips_empty_values() {
        let path = Path::new()
            .value(&Target::from("idx"))
            .value(&Target::default())
            .fixed("_ccr")
            .fixed("stats")
            .finish();
        assert_eq!(path, "/idx/_ccr/stats");
    }

    #[test]
    fn multi_target_segment() {
        let path = Path::new()
            .value(&Target::from(["a", "b", "c"]))
            .fixed("_search")
            .finish();
        assert_eq!(path, "/a,b,c/_search");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(Path::new().finish(), "/");
        let all_skipped = Path::new()
            .value(&Target::default())
            .value(&Target::from(""))
            .finish();
        assert_eq!(all_skipped, "/");
    }

    #[test_case("logs-2025.08.21", "logs-2025.08.21"; "unreserved")]
    #[test_case("some user", "some%20user"; "space")]
    #[test_case("a/b", "a%2Fb"; "slash")]
    #[test_case("a+b", "a%2Bb"; "plus")]
    #[test_case("<script>", "%3Cscript%3E"; "angle brackets")]
    #[test_case("über", "%C3%BCber"; "non-ascii")]
    #[test_case("log-*", "log-*"; "wildcard preserved")]
    #[test_case("a,b", "a,b"; "comma preserved")]
    fn value_encoding(input: &str, want: &str) {
        let path = Path::new().value(&Target::from(input)).finish();
        assert_eq!(path, format!("/{want}"));
    }

    #[test]
    fn joined_list_encodes_around_commas() {
        let path = Path::new()
            .value(&Target::from(["a b", "c/d"]))
            .finish();
        assert_eq!(path, "/a%20b,c%2Fd");
    }

    #[test]
    fn fixed_segments_pass_through() {
        let path = Path::new().fixed("_enrich").fixed("policy").finish();
        assert_eq!(path, "/_enrich/policy");
    }
}
