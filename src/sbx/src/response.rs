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

//! Response types.

/// A successful response from the service.
///
/// A response consists of a body, typically a deserialized JSON document, and
/// some metadata. The metadata preserves the HTTP status code and the
/// response headers.
///
/// # Examples
/// Inspecting the result of a request
///
/// ```no_run
/// # use searchbase_sbx::Result;
/// # use searchbase_sbx::response::Response;
/// async fn cluster_info() -> Result<Response<serde_json::Value>> {
///   // ...
/// # panic!()
/// }
///
/// # tokio_test::block_on(async {
/// let response = cluster_info().await?;
/// println!("version: {:?}", response.body().pointer("/version/number"));
/// # Result::<()>::Ok(()) });
/// ```
///
/// Creating a response for mocks
///
/// ```
/// # use searchbase_sbx::Result;
/// # use searchbase_sbx::response::Response;
/// fn make_mock_response(body: serde_json::Value) -> Result<Response<serde_json::Value>> {
///     Ok(Response::from(body))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use searchbase_sbx::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the HTTP status code of this response.
    ///
    /// `None` for responses created directly from a body, such as mocks.
    /// Usually `2xx`, but when a request runs with ignored error statuses the
    /// ignored status appears here.
    pub fn status_code(&self) -> Option<u16> {
        self.parts.status_code
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    ///
    /// # Example
    /// ```
    /// # use searchbase_sbx::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.into_body().as_str(), "test");
    /// ```
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response, other than the body.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code, when the response came over the wire.
    pub status_code: Option<u16>,
    /// The HTTP response headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    pub fn new() -> Self {
        Parts::default()
    }

    /// Sets the status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Sets the headers.
    ///
    /// # Example
    /// ```
    /// # use searchbase_sbx::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(
    ///     http::header::CONTENT_TYPE,
    ///     http::HeaderValue::from_static("application/json"),
    /// );
    /// let parts = Parts::new().set_headers(headers.clone());
    /// assert_eq!(parts.headers, headers);
    /// ```
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status_code(), None);
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_status_code(201).set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.status_code(), Some(201));
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
        assert_eq!(parts.status_code, Some(201));
    }

    #[test]
    fn parts() {
        let parts = Parts::new();
        assert!(parts.headers.is_empty());
        assert!(parts.status_code.is_none());

        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_headers(headers.clone());
        assert_eq!(parts.headers, headers);
    }
}
