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

//! Per-request options.

use crate::credentials::Credentials;
use crate::params::{ParamValue, Params};
use std::collections::BTreeMap;
use std::time::Duration;

/// The options for a single request.
///
/// Every operation takes a `RequestOptions` as its last argument. The default
/// value sends the request as-is; the `with_*` functions customize the query
/// string, the headers, and the transport behavior:
///
/// ```
/// use searchbase_sbx::options::RequestOptions;
/// use std::time::Duration;
/// let options = RequestOptions::new()
///     .with_param("pretty", true)
///     .with_header("x-correlation", "req-1234")
///     .with_timeout(Duration::from_secs(30))
///     .with_ignore_status([404]);
/// assert_eq!(options.params().get("pretty"), Some("true"));
/// ```
///
/// Query parameters set here are checked against the parameters the target
/// operation accepts. Unknown parameters are discarded before the request is
/// sent, or rejected when the client is configured for strict parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    params: Params,
    headers: BTreeMap<String, String>,
    timeout: Option<Duration>,
    ignore_status: Vec<u16>,
    opaque_id: Option<String>,
    credentials: Option<Credentials>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query string parameter.
    pub fn with_param<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: ParamValue,
    {
        self.params.set(name, value);
        self
    }

    /// Adds a request header.
    ///
    /// Header names are case insensitive and stored lowercased. The name and
    /// value are validated when the request is built.
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Sets the timeout for this request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Treats the given HTTP error statuses as successful responses.
    ///
    /// This is useful for calls where an error status is an expected answer,
    /// such as a `404` when deleting something that may not exist.
    pub fn with_ignore_status<I: IntoIterator<Item = u16>>(mut self, statuses: I) -> Self {
        self.ignore_status = statuses.into_iter().collect();
        self
    }

    /// Sets the `x-opaque-id` header, used to correlate this request in the
    /// service's logs and task management APIs.
    pub fn with_opaque_id<T: Into<String>>(mut self, opaque_id: T) -> Self {
        self.opaque_id = Some(opaque_id.into());
        self
    }

    /// Overrides the client credentials for this request only.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn ignore_status(&self) -> &[u16] {
        &self.ignore_status
    }

    pub fn set_ignore_status(&mut self, statuses: Vec<u16>) {
        self.ignore_status = statuses;
    }

    pub fn opaque_id(&self) -> Option<&str> {
        self.opaque_id.as_deref()
    }

    pub fn set_opaque_id<T: Into<String>>(&mut self, opaque_id: T) {
        self.opaque_id = Some(opaque_id.into());
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }
}
