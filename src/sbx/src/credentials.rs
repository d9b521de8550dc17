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

//! Credential types for the Searchbase service.

use crate::error::Error;
use http::HeaderValue;

/// The credentials sent with each request.
///
/// All variants render to a single `authorization` header. The most common
/// forms are HTTP basic authentication and service API keys:
///
/// ```
/// use searchbase_sbx::credentials::Credentials;
/// let basic = Credentials::basic("admin", "hunter2");
/// let key = Credentials::api_key("id", "secret");
/// ```
///
/// The `Debug` representation censors the secret portions, so credentials can
/// appear in logs without leaking.
#[derive(Clone, PartialEq)]
pub enum Credentials {
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: String,
    },
    /// A bearer token, such as a service access token.
    Bearer(String),
    /// An API key as the id and secret pair issued by the service.
    ApiKey {
        id: String,
        key: String,
    },
    /// An API key already encoded in the form the service issued it.
    EncodedApiKey(String),
}

impl Credentials {
    pub fn basic<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn bearer<T: Into<String>>(token: T) -> Self {
        Credentials::Bearer(token.into())
    }

    pub fn api_key<I: Into<String>, K: Into<String>>(id: I, key: K) -> Self {
        Credentials::ApiKey {
            id: id.into(),
            key: key.into(),
        }
    }

    pub fn encoded_api_key<T: Into<String>>(encoded: T) -> Self {
        Credentials::EncodedApiKey(encoded.into())
    }

    /// Renders these credentials as an `authorization` header value.
    ///
    /// The returned value is marked sensitive, so debug output of the request
    /// headers does not reveal it.
    pub fn authorization(&self) -> Result<HeaderValue, Error> {
        use base64::prelude::{BASE64_STANDARD, Engine as _};
        let rendered = match self {
            Credentials::Basic { username, password } => {
                let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {encoded}")
            }
            Credentials::Bearer(token) => format!("Bearer {token}"),
            Credentials::ApiKey { id, key } => {
                let encoded = BASE64_STANDARD.encode(format!("{id}:{key}"));
                format!("ApiKey {encoded}")
            }
            Credentials::EncodedApiKey(encoded) => format!("ApiKey {encoded}"),
        };
        let mut value = HeaderValue::from_str(&rendered).map_err(Error::authentication)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[censored]")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[censored]").finish(),
            Credentials::ApiKey { id, .. } => f
                .debug_struct("ApiKey")
                .field("id", id)
                .field("key", &"[censored]")
                .finish(),
            Credentials::EncodedApiKey(_) => {
                f.debug_tuple("EncodedApiKey").field(&"[censored]").finish()
            }
        }
    }
}
