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

//! Query string parameters and their value coercions.

use std::collections::BTreeMap;

/// An ordered map of query string parameters.
///
/// Values are coerced to their query string form on insertion: booleans as
/// `true` and `false`, numbers in decimal, and lists as a comma-separated
/// value. `None` and empty lists are skipped.
///
/// ```
/// use searchbase_sbx::params::Params;
/// let mut params = Params::new();
/// params.set("ignore_unavailable", true);
/// params.set("max_docs", 1000_u64);
/// params.set("filter_path", ["took", "hits.total"].as_slice());
/// params.set("routing", None::<&str>);
/// assert_eq!(params.get("filter_path"), Some("took,hits.total"));
/// assert_eq!(params.get("routing"), None);
/// ```
///
/// Iteration order is the lexicographic order of the parameter names, so the
/// resulting query strings are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value.
    ///
    /// Values that coerce to nothing, such as `None`, leave the map
    /// unchanged.
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: ParamValue,
    {
        if let Some(value) = value.format() {
            self.entries.insert(name.into(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Moves the value under `from` to the name `to`, if present.
    ///
    /// Returns `true` if a value moved.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.entries.remove(from) {
            Some(value) => {
                self.entries.insert(to.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Conversion of typed values into their query string form.
///
/// Implemented for the types that commonly appear as parameter values.
/// `format` returns `None` when the value represents "nothing to send".
pub trait ParamValue {
    fn format(self) -> Option<String>;
}

impl ParamValue for String {
    fn format(self) -> Option<String> {
        Some(self)
    }
}

impl ParamValue for &String {
    fn format(self) -> Option<String> {
        Some(self.clone())
    }
}

impl ParamValue for &str {
    fn format(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for bool {
    fn format(self) -> Option<String> {
        Some(if self { "true" } else { "false" }.to_string())
    }
}

macro_rules! impl_param_value_for_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl ParamValue for $t {
                fn format(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_param_value_for_number!(i16, i32, i64, u16, u32, u64, usize, f32, f64);

impl ParamValue for &[&str] {
    fn format(self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.join(","))
    }
}

impl ParamValue for Vec<&str> {
    fn format(self) -> Option<String> {
        self.as_slice().format()
    }
}

impl ParamValue for Vec<String> {
    fn format(self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.join(","))
    }
}

impl<const N: usize> ParamValue for [&str; N] {
    fn format(self) -> Option<String> {
        self.as_slice().format()
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn format(self) -> Option<String> {
        self.and_then(ParamValue::format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("v", Some("v"); "str")]
    #[test_case(String::from("v"), Some("v"); "owned string")]
    #[test_case(true, Some("true"); "boolean true")]
    #[test_case(false, Some("false"); "boolean false")]
    #[test_case(0_i32, Some("0"); "zero")]
    #[test_case(42_u64, Some("42"); "unsigned")]
    #[test_case(-7_i64, Some("-7"); "negative")]
    #[test_case(1.5_f64, Some("1.5"); "float")]
    #[test_case(["a", "b"], Some("a,b"); "array")]
    #[test_case(vec!["a", "b", "c"], Some("a,b,c"); "vector")]
    #[test_case(Vec::<String>::new(), None; "empty vector")]
    #[test_case(Some("v"), Some("v"); "some")]
    #[test_case(None::<bool>, None; "none")]
    fn coercions<V: ParamValue>(value: V, want: Option<&str>) {
        let mut params = Params::new();
        params.set("k", value);
        assert_eq!(params.get("k"), want);
    }

    #[test]
    fn set_and_replace() {
        let mut params = Params::new();
        params.set("routing", "alpha");
        params.set("routing", "beta");
        assert_eq!(params.get("routing"), Some("beta"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn none_does_not_clear() {
        let mut params = Params::new();
        params.set("routing", "alpha");
        params.set("routing", None::<&str>);
        assert_eq!(params.get("routing"), Some("alpha"));
    }

    #[test]
    fn rename() {
        let mut params = Params::new();
        params.set("from_", 10_u64);
        assert!(params.rename("from_", "from"));
        assert_eq!(params.get("from"), Some("10"));
        assert!(!params.contains("from_"));
        assert!(!params.rename("missing", "other"));
    }

    #[test]
    fn iteration_is_sorted() {
        let mut params = Params::new();
        params.set("zebra", "1");
        params.set("alpha", "2");
        params.set("mango", "3");
        let names = params.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(names, ["alpha", "mango", "zebra"]);
    }

    #[test]
    fn remove() {
        let mut params = Params::new();
        params.set("pretty", true);
        assert_eq!(params.remove("pretty"), Some("true".to_string()));
        assert!(params.is_empty());
        assert_eq!(params.remove("pretty"), None);
    }
}
