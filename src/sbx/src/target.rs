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

//! A flexible representation for path arguments.

/// A value interpolated into a request path, such as an index name, a policy
/// name, or a document id.
///
/// Many endpoints accept either a single name or a list of names in the same
/// path position. `Target` absorbs both: a list renders as a single
/// comma-separated path segment, as the service expects.
///
/// Operations take path arguments as `impl Into<Target>`, so call sites can
/// pass string literals, owned strings, vectors, or arrays directly:
///
/// ```
/// use searchbase_sbx::target::Target;
/// let single = Target::from("logs-2025");
/// let many = Target::from(["logs-2025", "logs-2024"]);
/// assert!(!single.is_empty());
/// assert_eq!(many.joined(), "logs-2025,logs-2024");
/// ```
///
/// An empty target (`""`, an empty vector, or `None`) means "not provided".
/// Optional path arguments treat it as absent and skip the path segment,
/// while required path arguments reject it before sending anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Target {
    parts: Vec<String>,
}

impl Target {
    /// Returns true if this target does not name anything.
    ///
    /// A target with no parts is empty, and so is a target whose parts are
    /// all empty strings.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.is_empty())
    }

    /// The target as a single comma-separated value.
    pub fn joined(&self) -> String {
        self.parts.join(",")
    }

    /// The individual values in this target.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Self {
            parts: vec![value.to_string()],
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Self { parts: vec![value] }
    }
}

impl From<&String> for Target {
    fn from(value: &String) -> Self {
        Self {
            parts: vec![value.clone()],
        }
    }
}

impl From<Vec<String>> for Target {
    fn from(value: Vec<String>) -> Self {
        Self { parts: value }
    }
}

impl From<Vec<&str>> for Target {
    fn from(value: Vec<&str>) -> Self {
        Self {
            parts: value.into_iter().map(str::to_string).collect(),
        }
    }
}

impl From<&[&str]> for Target {
    fn from(value: &[&str]) -> Self {
        Self {
            parts: value.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for Target {
    fn from(value: [&str; N]) -> Self {
        Self {
            parts: value.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl<T> From<Option<T>> for Target
where
    T: Into<Target>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Target::default, T::into)
    }
}
