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

//! Operation descriptors and assembled requests.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use sbx::credentials::Credentials;
use sbx::error::Error;
use sbx::ndjson::NdBody;
use std::collections::BTreeMap;
use std::time::Duration;

/// A static description of one API operation.
///
/// Each operation method refers to one of these. The descriptor fixes the
/// HTTP method and the set of query string parameters the operation accepts.
/// The display parameters accepted by every operation are not repeated here.
pub struct Operation {
    /// The qualified operation name, e.g. `ccr.follow`. Used in diagnostics.
    pub name: &'static str,
    /// The HTTP method.
    pub method: Method,
    /// The query string parameters this operation accepts.
    pub params: &'static [&'static str],
}

/// A fully assembled request, ready for the transport.
///
/// A plan is produced by the client from an [Operation], a rendered path, and
/// the per-request options. By the time a plan exists, all validation has
/// passed: producing a plan does no I/O, and a plan that could not be
/// produced means the request was never sent.
#[derive(Clone, Debug)]
pub struct RequestPlan {
    pub(crate) name: &'static str,
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Body>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) ignore_status: Vec<u16>,
    pub(crate) credentials: Option<Credentials>,
}

#[derive(Clone, Debug)]
pub(crate) enum Body {
    Json(bytes::Bytes),
    NdJson(bytes::Bytes),
}

impl RequestPlan {
    pub(crate) fn new(operation: &'static Operation, path: String) -> Self {
        Self {
            name: operation.name,
            method: operation.method.clone(),
            path,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            ignore_status: Vec::new(),
            credentials: None,
        }
    }

    /// Attaches a JSON body.
    ///
    /// Sets the `content-type` to `application/json` unless the caller
    /// already provided one.
    pub fn json(mut self, body: &serde_json::Value) -> sbx::Result<Self> {
        let payload = serde_json::to_vec(body).map_err(Error::ser)?;
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        self.body = Some(Body::Json(bytes::Bytes::from(payload)));
        Ok(self)
    }

    /// Attaches an optional JSON body.
    ///
    /// `None` and JSON `null` mean "no body".
    pub fn maybe_json(self, body: Option<&serde_json::Value>) -> sbx::Result<Self> {
        match body {
            None | Some(serde_json::Value::Null) => Ok(self),
            Some(value) => self.json(value),
        }
    }

    /// Attaches a newline-delimited body.
    ///
    /// Always sets the `content-type` to `application/x-ndjson`, replacing
    /// any caller-provided value. The bulk endpoints reject other content
    /// types.
    pub fn ndjson(mut self, body: NdBody) -> sbx::Result<Self> {
        let payload = body.into_payload()?;
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-ndjson"),
        );
        self.body = Some(Body::NdJson(payload));
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn set_query(&mut self, params: &sbx::params::Params) {
        self.query = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
    }
}

// Header names and values arrive as plain strings. Rejecting bad ones here
// keeps the failure local instead of surfacing as an opaque transport error.
pub(crate) fn insert_headers(
    headers: &mut HeaderMap,
    items: &BTreeMap<String, String>,
) -> sbx::Result<()> {
    for (name, value) in items {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::validation)?;
        let value = HeaderValue::from_str(value).map_err(Error::validation)?;
        headers.insert(name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    static TEST_OP: Operation = Operation {
        name: "test.op",
        method: Method::POST,
        params: &["routing"],
    };

    #[test]
    fn new_plan_is_bare() {
        let plan = RequestPlan::new(&TEST_OP, "/idx/_test".into());
        assert_eq!(plan.name, "test.op");
        assert_eq!(plan.method(), &Method::POST);
        assert_eq!(plan.path(), "/idx/_test");
        assert!(plan.query().is_empty());
        assert!(plan.headers().is_empty());
        assert!(plan.body.is_none());
        assert!(plan.timeout.is_none());
        assert!(plan.ignore_status.is_empty());
        assert!(plan.credentials.is_none());
    }

    #[test]
    fn json_sets_content_type() -> Result {
        let plan = RequestPlan::new(&TEST_OP, "/".into()).json(&json!({"q": 1}))?;
        assert_eq!(
            plan.headers().get(CONTENT_TYPE).map(|v| v.to_str()).transpose()?,
            Some("application/json")
        );
        match &plan.body {
            Some(Body::Json(payload)) => assert_eq!(payload.as_ref(), br#"{"q":1}"#),
            other => panic!("expected a JSON body, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn json_respects_caller_content_type() -> Result {
        let mut plan = RequestPlan::new(&TEST_OP, "/".into());
        plan.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.custom+json"));
        let plan = plan.json(&json!({}))?;
        assert_eq!(
            plan.headers().get(CONTENT_TYPE).map(|v| v.to_str()).transpose()?,
            Some("application/vnd.custom+json")
        );
        Ok(())
    }

    #[test]
    fn maybe_json_skips_missing_bodies() -> Result {
        let plan = RequestPlan::new(&TEST_OP, "/".into()).maybe_json(None)?;
        assert!(plan.body.is_none());
        assert!(plan.headers().get(CONTENT_TYPE).is_none());

        let null = json!(null);
        let plan = RequestPlan::new(&TEST_OP, "/".into()).maybe_json(Some(&null))?;
        assert!(plan.body.is_none());

        let value = json!({"acknowledge": true});
        let plan = RequestPlan::new(&TEST_OP, "/".into()).maybe_json(Some(&value))?;
        assert!(plan.body.is_some());
        Ok(())
    }

    #[test]
    fn ndjson_forces_content_type() -> Result {
        let mut plan = RequestPlan::new(&TEST_OP, "/".into());
        plan.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let plan = plan.ndjson(NdBody::from(vec![json!({"a": 1})]))?;
        assert_eq!(
            plan.headers().get(CONTENT_TYPE).map(|v| v.to_str()).transpose()?,
            Some("application/x-ndjson")
        );
        match &plan.body {
            Some(Body::NdJson(payload)) => assert_eq!(payload.as_ref(), b"{\"a\":1}\n"),
            other => panic!("expected an ndjson body, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn set_query_preserves_name_order() {
        let mut params = sbx::params::Params::new();
        params.set("wait_for_completion", false);
        params.set("keep_alive", "5m");
        let mut plan = RequestPlan::new(&TEST_OP, "/".into());
        plan.set_query(&params);
        assert_eq!(
            plan.query(),
            [
                ("keep_alive".to_string(), "5m".to_string()),
                ("wait_for_completion".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn insert_headers_validates() {
        let mut headers = HeaderMap::new();
        let mut items = BTreeMap::new();
        items.insert("x-app".to_string(), "tests".to_string());
        insert_headers(&mut headers, &items).unwrap();
        assert_eq!(headers.get("x-app"), Some(&HeaderValue::from_static("tests")));

        let mut items = BTreeMap::new();
        items.insert("bad header".to_string(), "v".to_string());
        let error = insert_headers(&mut headers, &items).unwrap_err();
        assert!(error.is_validation(), "{error:?}");

        let mut items = BTreeMap::new();
        items.insert("x-app".to_string(), "bad\nvalue".to_string());
        let error = insert_headers(&mut headers, &items).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
    }
}
