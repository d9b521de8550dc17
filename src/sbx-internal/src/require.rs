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

//! Validation of required operation arguments.
//!
//! Required arguments are checked before anything else happens: a request
//! with a missing argument never reaches the transport. "Missing" means an
//! empty value, not a falsy one. The number `0`, the boolean `false`, and an
//! empty JSON object are all real payloads the service accepts.

use sbx::ndjson::NdBody;
use sbx::target::Target;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("empty value passed for a required argument '{0}'")]
    EmptyArgument(String),
}

/// Checks that a required path argument names something.
pub fn argument(name: &str, value: &Target) -> sbx::Result<()> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(())
}

/// Checks that a required JSON body has content.
///
/// `null`, the empty string, and the empty array count as missing.
pub fn body(value: &serde_json::Value) -> sbx::Result<()> {
    let empty = match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(a) => a.is_empty(),
        _ => false,
    };
    if empty {
        return Err(missing("body"));
    }
    Ok(())
}

/// Checks that a required newline-delimited body has content.
pub fn ndbody(value: &NdBody) -> sbx::Result<()> {
    if value.is_empty() {
        return Err(missing("body"));
    }
    Ok(())
}

fn missing(name: &str) -> sbx::error::Error {
    sbx::error::Error::validation(Error::EmptyArgument(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(Target::from("idx"), true; "name")]
    #[test_case(Target::from(["a", "b"]), true; "list")]
    #[test_case(Target::from("0"), true; "zero as string")]
    #[test_case(Target::default(), false; "unset")]
    #[test_case(Target::from(""), false; "empty string")]
    #[test_case(Target::from(Vec::<String>::new()), false; "empty list")]
    fn argument(value: Target, ok: bool) {
        let got = super::argument("index", &value);
        assert_eq!(got.is_ok(), ok, "{got:?}");
    }

    #[test]
    fn argument_error_names_the_argument() {
        let error = super::argument("policy", &Target::default()).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
        assert!(
            error.to_string().contains("required argument 'policy'"),
            "{error}"
        );
        let source = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::EmptyArgument(p)) if p == "policy"),
            "{error:?}"
        );
    }

    #[test_case(json!({"policy": {}}), true; "object")]
    #[test_case(json!({}), true; "empty object")]
    #[test_case(json!(0), true; "zero")]
    #[test_case(json!(false), true; "boolean false")]
    #[test_case(json!(["a"]), true; "array")]
    #[test_case(json!("raw"), true; "string")]
    #[test_case(json!(null), false; "null")]
    #[test_case(json!(""), false; "empty string")]
    #[test_case(json!([]), false; "empty array")]
    fn body(value: serde_json::Value, ok: bool) {
        let got = super::body(&value);
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if !ok {
            let error = got.unwrap_err();
            assert!(error.is_validation(), "{error:?}");
            assert!(
                error.to_string().contains("required argument 'body'"),
                "{error}"
            );
        }
    }

    #[test]
    fn ndbody() {
        assert!(super::ndbody(&NdBody::from("{}\n")).is_ok());
        let error = super::ndbody(&NdBody::from("")).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
    }
}
