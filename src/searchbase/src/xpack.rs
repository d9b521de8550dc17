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

use crate::Result;
use http::Method;
use sbx::options::RequestOptions;
use sbx::response::Response;
use sbxi::http::RestClient;
use sbxi::path::Path;
use sbxi::plan::Operation;
use serde_json::Value;
use std::sync::Arc;

/// A client for the legacy feature umbrella APIs.
///
/// Historically every licensed feature lived under this umbrella, and
/// client code reached the feature areas through it. The namespaces are
/// first-class on [Searchbase][crate::Searchbase] now. This client keeps
/// the umbrella's own operations and, for ported call sites, a named
/// accessor per sibling namespace. Each accessor is spelled out, there is
/// no catch-all forwarding.
#[derive(Clone, Debug)]
pub struct Xpack {
    transport: Arc<RestClient>,
}

static INFO: Operation = Operation {
    name: "xpack.info",
    method: Method::GET,
    params: &["accept_enterprise", "categories"],
};

static USAGE: Operation = Operation {
    name: "xpack.usage",
    method: Method::GET,
    params: &["master_timeout"],
};

impl Xpack {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Returns the installed features and their license status.
    pub async fn info(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_xpack").finish();
        let plan = self.transport.plan(&INFO, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns usage information for every feature.
    pub async fn usage(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_xpack").fixed("usage").finish();
        let plan = self.transport.plan(&USAGE, path, options)?;
        self.transport.execute(plan).await
    }

    /// The autoscaling namespace, as reachable before the umbrella split.
    pub fn autoscaling(&self) -> crate::autoscaling::Autoscaling {
        crate::autoscaling::Autoscaling::new(self.transport.clone())
    }

    /// The cross-cluster replication namespace.
    pub fn ccr(&self) -> crate::ccr::Ccr {
        crate::ccr::Ccr::new(self.transport.clone())
    }

    /// The enrich namespace.
    pub fn enrich(&self) -> crate::enrich::Enrich {
        crate::enrich::Enrich::new(self.transport.clone())
    }

    /// The event query language namespace.
    pub fn eql(&self) -> crate::eql::Eql {
        crate::eql::Eql::new(self.transport.clone())
    }

    /// The graph namespace.
    pub fn graph(&self) -> crate::graph::Graph {
        crate::graph::Graph::new(self.transport.clone())
    }

    /// The index lifecycle management namespace.
    pub fn ilm(&self) -> crate::ilm::Ilm {
        crate::ilm::Ilm::new(self.transport.clone())
    }

    /// The ingest namespace.
    pub fn ingest(&self) -> crate::ingest::Ingest {
        crate::ingest::Ingest::new(self.transport.clone())
    }

    /// The license namespace.
    pub fn license(&self) -> crate::license::License {
        crate::license::License::new(self.transport.clone())
    }

    /// The monitoring namespace.
    pub fn monitoring(&self) -> crate::monitoring::Monitoring {
        crate::monitoring::Monitoring::new(self.transport.clone())
    }

    /// The TLS certificate namespace.
    pub fn ssl(&self) -> crate::ssl::Ssl {
        crate::ssl::Ssl::new(self.transport.clone())
    }

    /// The transform namespace.
    pub fn transform(&self) -> crate::transform::Transform {
        crate::transform::Transform::new(self.transport.clone())
    }
}
