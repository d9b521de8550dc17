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

pub use crate::Error;
pub use crate::Result;
use http::Method;
use sbx::options::RequestOptions;
use sbx::response::Response;
use sbxi::http::RestClient;
use sbxi::plan::Operation;
use serde_json::Value;
use std::sync::Arc;

/// Implements a client for the Searchbase REST API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use searchbase::Searchbase;
/// let client = Searchbase::builder().build().await?;
/// // use `client` to make requests to the cluster.
/// # searchbase::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Searchbase` use the `with_*` methods in the type returned
/// by [builder()][Searchbase::builder]. The default configuration should
/// work for a local development cluster. Common configuration changes
/// include
///
/// * [with_endpoint()]: by default this client targets
///   `http://localhost:9200`. Any deployed cluster needs its own endpoint.
/// * [with_credentials()]: by default requests carry no `authorization`
///   header. Secured clusters require basic, bearer, or API key
///   credentials.
///
/// # Pooling and Cloning
///
/// `Searchbase` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Searchbase` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: sbx::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: sbx::client_builder::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Searchbase {
    transport: Arc<RestClient>,
}

static INFO: Operation = Operation {
    name: "info",
    method: Method::GET,
    params: &[],
};

static PING: Operation = Operation {
    name: "ping",
    method: Method::HEAD,
    params: &[],
};

impl Searchbase {
    /// Returns a builder for [Searchbase].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use searchbase::Searchbase;
    /// let client = Searchbase::builder().build().await?;
    /// # searchbase::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        sbx::client_builder::internal::new_builder(client_builder::Factory)
    }

    pub(crate) async fn new(
        config: sbxi::options::ClientConfig,
    ) -> sbx::client_builder::Result<Self> {
        let transport = RestClient::new(config, DEFAULT_HOST).await?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Returns basic information about the cluster.
    ///
    /// # Example
    /// ```
    /// # use searchbase::Searchbase;
    /// # use searchbase::options::RequestOptions;
    /// async fn example(client: &Searchbase) -> searchbase::Result<()> {
    ///     let response = client.info(RequestOptions::new()).await?;
    ///     println!("cluster says: {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub async fn info(&self, options: RequestOptions) -> Result<Response<Value>> {
        let plan = self.transport.plan(&INFO, "/".into(), options)?;
        self.transport.execute(plan).await
    }

    /// Returns true if the cluster answers at all.
    ///
    /// Transport failures, including an unreachable host, report as
    /// `Ok(false)` rather than an error.
    pub async fn ping(&self, options: RequestOptions) -> Result<bool> {
        let plan = self.transport.plan(&PING, "/".into(), options)?;
        self.transport.probe(plan).await
    }

    /// A client for the autoscaling policy APIs.
    pub fn autoscaling(&self) -> crate::autoscaling::Autoscaling {
        crate::autoscaling::Autoscaling::new(self.transport.clone())
    }

    /// A client for the cross-cluster replication APIs.
    pub fn ccr(&self) -> crate::ccr::Ccr {
        crate::ccr::Ccr::new(self.transport.clone())
    }

    /// A client for the enrich policy APIs.
    pub fn enrich(&self) -> crate::enrich::Enrich {
        crate::enrich::Enrich::new(self.transport.clone())
    }

    /// A client for the event query language search APIs.
    pub fn eql(&self) -> crate::eql::Eql {
        crate::eql::Eql::new(self.transport.clone())
    }

    /// A client for the graph explore API.
    pub fn graph(&self) -> crate::graph::Graph {
        crate::graph::Graph::new(self.transport.clone())
    }

    /// A client for the index lifecycle management APIs.
    pub fn ilm(&self) -> crate::ilm::Ilm {
        crate::ilm::Ilm::new(self.transport.clone())
    }

    /// A client for the ingest pipeline APIs.
    pub fn ingest(&self) -> crate::ingest::Ingest {
        crate::ingest::Ingest::new(self.transport.clone())
    }

    /// A client for the license APIs.
    pub fn license(&self) -> crate::license::License {
        crate::license::License::new(self.transport.clone())
    }

    /// A client for the monitoring bulk API.
    pub fn monitoring(&self) -> crate::monitoring::Monitoring {
        crate::monitoring::Monitoring::new(self.transport.clone())
    }

    /// A client for the TLS certificate API.
    pub fn ssl(&self) -> crate::ssl::Ssl {
        crate::ssl::Ssl::new(self.transport.clone())
    }

    /// A client for the transform APIs.
    pub fn transform(&self) -> crate::transform::Transform {
        crate::transform::Transform::new(self.transport.clone())
    }

    /// A client for the legacy feature umbrella APIs.
    pub fn xpack(&self) -> crate::xpack::Xpack {
        crate::xpack::Xpack::new(self.transport.clone())
    }
}

/// A builder for [Searchbase].
///
/// ```
/// # tokio_test::block_on(async {
/// # use searchbase::*;
/// # use client::ClientBuilder;
/// # use client::Searchbase;
/// let builder: ClientBuilder = Searchbase::builder();
/// let client = builder
///     .with_endpoint("https://search.internal.example.com:9243")
///     .build()
///     .await?;
/// # searchbase::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder = sbx::client_builder::ClientBuilder<client_builder::Factory>;

pub(crate) mod client_builder {
    use super::Searchbase;
    pub struct Factory;
    impl sbx::client_builder::internal::ClientFactory for Factory {
        type Client = Searchbase;
        async fn build(
            self,
            config: sbxi::options::ClientConfig,
        ) -> sbx::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// The default host used by the client.
const DEFAULT_HOST: &str = "http://localhost:9200";
