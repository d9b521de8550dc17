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
use sbx::target::Target;
use sbxi::http::RestClient;
use sbxi::path::Path;
use sbxi::plan::Operation;
use sbxi::require;
use serde_json::Value;
use std::sync::Arc;

/// A client for the ingest pipeline APIs.
#[derive(Clone, Debug)]
pub struct Ingest {
    transport: Arc<RestClient>,
}

static GET_PIPELINE: Operation = Operation {
    name: "ingest.get_pipeline",
    method: Method::GET,
    params: &["master_timeout", "summary"],
};

static PUT_PIPELINE: Operation = Operation {
    name: "ingest.put_pipeline",
    method: Method::PUT,
    params: &["if_version", "master_timeout", "timeout"],
};

static DELETE_PIPELINE: Operation = Operation {
    name: "ingest.delete_pipeline",
    method: Method::DELETE,
    params: &["master_timeout", "timeout"],
};

static SIMULATE: Operation = Operation {
    name: "ingest.simulate",
    method: Method::POST,
    params: &["verbose"],
};

static PROCESSOR_GROK: Operation = Operation {
    name: "ingest.processor_grok",
    method: Method::GET,
    params: &[],
};

static GEO_IP_STATS: Operation = Operation {
    name: "ingest.geo_ip_stats",
    method: Method::GET,
    params: &[],
};

impl Ingest {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Returns ingest pipelines, all of them when `id` is empty.
    pub async fn get_pipeline(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        let path = Path::new()
            .fixed("_ingest")
            .fixed("pipeline")
            .value(&id)
            .finish();
        let plan = self.transport.plan(&GET_PIPELINE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Creates or updates an ingest pipeline.
    pub async fn put_pipeline(
        &self,
        id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::argument("id", &id)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_ingest")
            .fixed("pipeline")
            .value(&id)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_PIPELINE, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Deletes an ingest pipeline.
    pub async fn delete_pipeline(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::argument("id", &id)?;
        let path = Path::new()
            .fixed("_ingest")
            .fixed("pipeline")
            .value(&id)
            .finish();
        let plan = self.transport.plan(&DELETE_PIPELINE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Runs sample documents through a pipeline without indexing them.
    ///
    /// When `id` is empty the pipeline definition must be part of the
    /// request body.
    pub async fn simulate(
        &self,
        body: Value,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::body(&body)?;
        let path = Path::new()
            .fixed("_ingest")
            .fixed("pipeline")
            .value(&id)
            .fixed("_simulate")
            .finish();
        let plan = self.transport.plan(&SIMULATE, path, options)?.json(&body)?;
        self.transport.execute(plan).await
    }

    /// Returns the built-in grok patterns.
    pub async fn processor_grok(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new()
            .fixed("_ingest")
            .fixed("processor")
            .fixed("grok")
            .finish();
        let plan = self.transport.plan(&PROCESSOR_GROK, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns download statistics for the GeoIP databases.
    pub async fn geo_ip_stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new()
            .fixed("_ingest")
            .fixed("geoip")
            .fixed("stats")
            .finish();
        let plan = self.transport.plan(&GEO_IP_STATS, path, options)?;
        self.transport.execute(plan).await
    }
}
