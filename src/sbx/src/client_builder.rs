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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration,
//! for example, they may need to override the endpoint or the authentication
//! credentials. The Searchbase client libraries use a generic builder type to
//! provide such functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use searchbase_sbx::client_builder::examples;
//! # use searchbase_sbx::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://search.internal.example.com:9200")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::credentials::Credentials;
use std::collections::BTreeMap;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the configured endpoint could not be parsed.
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidEndpoint(_))
    }

    /// If true, one of the configured default headers is not valid.
    pub fn is_invalid_header(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidHeader(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::InvalidEndpoint(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn header<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::InvalidHeader(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the configured endpoint is not a valid URL")]
    InvalidEndpoint(#[source] BoxError),
    #[error("a configured default header is not valid")]
    InvalidHeader(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client. To create a client with the default
/// configuration just invoke the `.build()` method:
///
/// ```
/// # use searchbase_sbx::client_builder::examples;
/// # use searchbase_sbx::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder().build().await?;
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several methods to configure the client:
///
/// ```
/// # use searchbase_sbx::client_builder::examples;
/// # use searchbase_sbx::client_builder::Result;
/// use searchbase_sbx::credentials::Credentials;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("https://search.internal.example.com:9200")
///     .with_credentials(Credentials::api_key("id", "secret"))
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The default endpoint is `http://localhost:9200`.
    ///
    /// ```
    /// # use searchbase_sbx::client_builder::examples;
    /// # use searchbase_sbx::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://search.internal.example.com:9200")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configure the authentication credentials.
    ///
    /// By default requests are sent unauthenticated, which only works against
    /// unsecured deployments. Most deployments require credentials.
    ///
    /// ```
    /// # use searchbase_sbx::client_builder::examples;
    /// # use searchbase_sbx::client_builder::Result;
    /// use searchbase_sbx::credentials::Credentials;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_credentials(Credentials::basic("admin", "hunter2"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Sets the default timeout for all requests made by this client.
    ///
    /// Individual requests can override this value.
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.config.timeout = Some(v);
        self
    }

    /// Adds a header sent with every request made by this client.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config
            .headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Rejects unknown query string parameters.
    ///
    /// By default, parameters an operation does not accept are discarded
    /// before the request is sent. With this flag such parameters cause the
    /// operation to fail with a validation error instead.
    pub fn with_strict_params(mut self) -> Self {
        self.config.strict_params = true;
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration for each client should work for most
    /// applications. But some applications may need to override the default
    /// endpoint, the credentials, or other behaviors of the client.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub credentials: Option<Credentials>,
        pub timeout: Option<Duration>,
        pub headers: BTreeMap<String, String>,
        pub strict_params: bool,
        pub tracing: bool,
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::credentials::Credentials;
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.credentials, None);
            assert_eq!(config.timeout, None);
            assert!(config.headers.is_empty());
            assert!(!config.strict_params);
            assert!(!config.tracing);
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoint("http://example.com:9200")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com:9200"));
        }

        #[tokio::test]
        async fn credentials() {
            let client = Client::builder()
                .with_credentials(Credentials::bearer("token"))
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.credentials, Some(Credentials::bearer("token")));
        }

        #[tokio::test]
        async fn timeout_and_headers() {
            let client = Client::builder()
                .with_timeout(Duration::from_secs(90))
                .with_header("X-App", "tests")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.timeout, Some(Duration::from_secs(90)));
            assert_eq!(config.headers.get("x-app").map(String::as_str), Some("tests"));
        }

        #[tokio::test]
        async fn flags() {
            let client = Client::builder()
                .with_strict_params()
                .with_tracing()
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert!(config.strict_params);
            assert!(config.tracing);
        }
    }
}
