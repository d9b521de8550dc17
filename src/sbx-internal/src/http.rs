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

use crate::plan::{Body, Operation, RequestPlan};
use http::HeaderValue;
use http::header::AUTHORIZATION;
use sbx::Result;
use sbx::client_builder::Error as BuilderError;
use sbx::credentials::Credentials;
use sbx::error::{ApiError, Error};
use sbx::options::RequestOptions;
use sbx::response::{Parts, Response};
use std::time::Duration;

const USER_AGENT: &str = concat!("searchbase-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct RestClient {
    inner: reqwest::Client,
    endpoint: String,
    credentials: Option<Credentials>,
    default_headers: http::HeaderMap,
    default_timeout: Option<Duration>,
    strict_params: bool,
    tracing: bool,
}

impl RestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> sbx::client_builder::Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| default_endpoint.to_string());
        let parsed = url::Url::parse(&endpoint).map_err(BuilderError::endpoint)?;
        if parsed.cannot_be_a_base() {
            return Err(BuilderError::endpoint(format!(
                "'{endpoint}' cannot be used as a base URL"
            )));
        }
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let mut default_headers = http::HeaderMap::new();
        crate::plan::insert_headers(&mut default_headers, &config.headers)
            .map_err(BuilderError::header)?;
        let tracing = crate::options::tracing_enabled(&config);
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            endpoint,
            credentials: config.credentials,
            default_headers,
            default_timeout: config.timeout,
            strict_params: config.strict_params,
            tracing,
        })
    }

    /// Turns an operation, a rendered path, and the per-request options into
    /// a request plan.
    ///
    /// This is where every request-construction rule runs: reserved keys move
    /// to their options slot, the remaining parameters are checked against
    /// the operation descriptor, and headers are validated. Any error here
    /// means nothing was sent.
    pub fn plan(
        &self,
        operation: &'static Operation,
        path: String,
        mut options: RequestOptions,
    ) -> Result<RequestPlan> {
        crate::compat::reconcile(&mut options)?;
        crate::filter::apply(operation, options.params_mut(), self.strict_params)?;
        let mut plan = RequestPlan::new(operation, path);
        plan.set_query(options.params());
        let mut headers = self.default_headers.clone();
        crate::plan::insert_headers(&mut headers, options.headers())?;
        if let Some(opaque_id) = options.opaque_id() {
            let value = HeaderValue::from_str(opaque_id).map_err(Error::validation)?;
            headers.insert("x-opaque-id", value);
        }
        plan.headers = headers;
        plan.timeout = options.timeout().or(self.default_timeout);
        plan.ignore_status = options.ignore_status().to_vec();
        plan.credentials = options.credentials().cloned();
        Ok(plan)
    }

    pub async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        plan: RequestPlan,
    ) -> Result<Response<O>> {
        let name = plan.name;
        let ignore_status = plan.ignore_status.clone();
        if self.tracing {
            let method = plan.method.as_str();
            let path = plan.path.as_str();
            tracing::debug!("{name}: sending {method} {path}");
        }
        let builder = self.build_request(plan)?;
        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        if self.tracing {
            let code = status.as_u16();
            tracing::debug!("{name}: received status {code}");
        }
        let lenient = ignore_status.contains(&status.as_u16());
        if !status.is_success() && !lenient {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response, lenient).await
    }

    /// Sends the request and reports only whether the service answered with
    /// a success status. Transport failures read as "no".
    pub async fn probe(&self, plan: RequestPlan) -> Result<bool> {
        let builder = self.build_request(plan)?;
        match builder.send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn build_request(&self, plan: RequestPlan) -> Result<reqwest::RequestBuilder> {
        let url = format!("{}{}", &self.endpoint, plan.path);
        let mut builder = self.inner.request(plan.method, url);
        if !plan.query.is_empty() {
            builder = builder.query(&plan.query);
        }
        builder = builder.headers(plan.headers);
        if let Some(timeout) = plan.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(credentials) = plan.credentials.as_ref().or(self.credentials.as_ref()) {
            builder = builder.header(AUTHORIZATION, credentials.authorization()?);
        }
        if let Some(Body::Json(payload) | Body::NdJson(payload)) = plan.body {
            builder = builder.body(payload);
        }
        Ok(builder)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match parse_api_error(status_code, &body) {
        Some(details) => {
            Error::service_with_http_metadata(details, Some(status_code), Some(parts.headers))
        }
        None => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

// The error body fields are all optional, so any JSON object deserializes.
// Only treat the body as a service error when it actually names a cause.
fn parse_api_error(status_code: u16, body: &bytes::Bytes) -> Option<ApiError> {
    let mut parsed = serde_json::from_slice::<ApiError>(body).ok()?;
    if parsed.error_type().is_none() && parsed.reason().is_none_or(str::is_empty) {
        return None;
    }
    if parsed.status == 0 {
        parsed.status = status_code;
    }
    Some(parsed)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
    lenient: bool,
) -> Result<Response<O>> {
    // 204 No Content has no body and would fail JSON parsing.
    let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // An ignored error status carries an error body, which rarely matches
    // the expected shape. Fall back to the default in that case.
    let body = match body {
        content if content.is_empty() && no_content => O::default(),
        content if lenient => serde_json::from_slice::<O>(&content).unwrap_or_default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status_code(status_code)
            .set_headers(parts.headers),
        body,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use http::{HeaderMap, Method};
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Ack {
        #[serde(default)]
        acknowledged: bool,
    }

    static SEARCH: Operation = Operation {
        name: "search",
        method: Method::POST,
        params: &["routing", "size"],
    };

    const ENDPOINT: &str = "http://localhost:9200";

    fn config() -> crate::options::ClientConfig {
        crate::options::ClientConfig::default()
    }

    #[tokio::test]
    async fn new_applies_defaults() -> TestResult {
        let client = RestClient::new(config(), ENDPOINT).await?;
        assert_eq!(client.endpoint, "http://localhost:9200");
        assert!(client.credentials.is_none());
        assert!(client.default_headers.is_empty());
        assert!(client.default_timeout.is_none());
        assert!(!client.strict_params);
        Ok(())
    }

    #[tokio::test]
    async fn new_trims_endpoint_slash() -> TestResult {
        let client = RestClient::new(
            crate::options::ClientConfig {
                endpoint: Some("https://search.example.com:9243/".into()),
                ..config()
            },
            ENDPOINT,
        )
        .await?;
        assert_eq!(client.endpoint, "https://search.example.com:9243");
        Ok(())
    }

    #[test_case("not a url")]
    #[test_case("localhost:9200"; "missing scheme")]
    #[tokio::test]
    async fn new_rejects_bad_endpoint(endpoint: &str) {
        let result = RestClient::new(
            crate::options::ClientConfig {
                endpoint: Some(endpoint.into()),
                ..config()
            },
            ENDPOINT,
        )
        .await;
        let error = result.err().unwrap();
        assert!(error.is_invalid_endpoint(), "{error:?}");
    }

    #[tokio::test]
    async fn new_rejects_bad_default_header() {
        let mut cfg = config();
        cfg.headers
            .insert("x-team".into(), "bad\r\nvalue".into());
        let result = RestClient::new(cfg, ENDPOINT).await;
        let error = result.err().unwrap();
        assert!(error.is_invalid_header(), "{error:?}");
    }

    #[tokio::test]
    async fn plan_runs_the_pipeline() -> TestResult {
        let client = RestClient::new(config(), ENDPOINT).await?;
        let options = RequestOptions::new()
            .with_param("routing", "user-1")
            .with_param("unknown", "x")
            .with_param("request_timeout", 30_u64)
            .with_param("pretty", true)
            .with_header("x-team", "search")
            .with_opaque_id("req-1");
        let plan = client.plan(&SEARCH, "/idx/_search".into(), options)?;
        assert_eq!(plan.method(), &Method::POST);
        assert_eq!(plan.path(), "/idx/_search");
        assert_eq!(
            plan.query(),
            [
                ("pretty".to_string(), "true".to_string()),
                ("routing".to_string(), "user-1".to_string()),
            ]
        );
        assert_eq!(
            plan.headers().get("x-team"),
            Some(&HeaderValue::from_static("search"))
        );
        assert_eq!(
            plan.headers().get("x-opaque-id"),
            Some(&HeaderValue::from_static("req-1"))
        );
        assert_eq!(plan.timeout, Some(Duration::from_secs(30)));
        Ok(())
    }

    #[tokio::test]
    async fn plan_strict_mode_rejects_unknown() -> TestResult {
        let client = RestClient::new(
            crate::options::ClientConfig {
                strict_params: true,
                ..config()
            },
            ENDPOINT,
        )
        .await?;
        let options = RequestOptions::new().with_param("unknown", "x");
        let error = client
            .plan(&SEARCH, "/idx/_search".into(), options)
            .unwrap_err();
        assert!(error.is_validation(), "{error:?}");
        Ok(())
    }

    #[tokio::test]
    async fn plan_request_timeout_beats_client_default() -> TestResult {
        let client = RestClient::new(
            crate::options::ClientConfig {
                timeout: Some(Duration::from_secs(60)),
                ..config()
            },
            ENDPOINT,
        )
        .await?;
        let plan = client.plan(&SEARCH, "/_search".into(), RequestOptions::new())?;
        assert_eq!(plan.timeout, Some(Duration::from_secs(60)));

        let options = RequestOptions::new().with_timeout(Duration::from_secs(5));
        let plan = client.plan(&SEARCH, "/_search".into(), options)?;
        assert_eq!(plan.timeout, Some(Duration::from_secs(5)));
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_opaque_body() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "text/plain")
            .status(502)
            .body("upstream gone")?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.err().unwrap();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("text/plain"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("upstream gone")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_unrecognized_json() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"oops": true}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.err().unwrap();
        // The body parses as JSON but names no cause, so it is not a
        // service error.
        assert!(err.api_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        Ok(())
    }

    #[tokio::test]
    async fn service_error_with_details() -> TestResult {
        let body = serde_json::json!({
            "error": {
                "type": "index_not_found_exception",
                "reason": "no such index [missing]",
                "root_cause": [{
                    "type": "index_not_found_exception",
                    "reason": "no such index [missing]"
                }]
            },
            "status": 404
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.err().unwrap();
        let details = err.api_error().unwrap();
        assert_eq!(details.status, 404);
        assert_eq!(details.error_type(), Some("index_not_found_exception"));
        assert_eq!(details.reason(), Some("no such index [missing]"));
        assert_eq!(err.http_status_code(), Some(404));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    async fn service_error_with_string_cause() -> TestResult {
        let http_resp = http::Response::builder()
            .status(404)
            .body(r#"{"error": "alias [logs] missing", "status": 404}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.err().unwrap();
        let details = err.api_error().unwrap();
        assert_eq!(details.reason(), Some("alias [logs] missing"));
        assert_eq!(details.error_type(), None);
        Ok(())
    }

    #[tokio::test]
    async fn service_error_status_defaults_to_http() -> TestResult {
        let http_resp = http::Response::builder()
            .status(418)
            .body(r#"{"error": {"type": "brew_exception", "reason": "teapot"}}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.err().unwrap();
        assert_eq!(err.api_error().unwrap().status, 418);
        Ok(())
    }

    #[test_case(reqwest::StatusCode::OK, r#"{"acknowledged": true}"#, Ack { acknowledged: true }; "200 with body")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}", Ack::default(); "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "", Ack::default(); "204 with empty content")]
    #[tokio::test]
    async fn response_content(code: reqwest::StatusCode, content: &str, want: Ack) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<Ack>(response, false).await?;
        assert_eq!(response.status_code(), Some(code.as_u16()));
        assert_eq!(response.into_body(), want);
        Ok(())
    }

    #[tokio::test]
    async fn response_empty_200_is_an_error() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "")?;
        let result = super::to_http_response::<Ack>(response, false).await;
        let err = result.err().unwrap();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn response_lenient_falls_back_to_default() -> TestResult {
        let response = resp_from_code_content(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"error": "no such index", "status": 404}"#,
        )?;
        let response = super::to_http_response::<Ack>(response, true).await?;
        assert_eq!(response.status_code(), Some(404));
        assert_eq!(response.into_body(), Ack::default());
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
